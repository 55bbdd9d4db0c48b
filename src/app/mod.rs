pub mod event;
pub mod form;
pub mod mode;
pub mod result_page;
pub mod state;

pub use form::{Form, FormError, FormField};
pub use mode::Mode;
pub use result_page::ResultPage;
pub use state::AppState;
