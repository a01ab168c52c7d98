mod row_input;
mod spinner;

pub use row_input::RowInput;
pub use spinner::Spinner;
