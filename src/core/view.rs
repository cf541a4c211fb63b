use crate::models::record::Record;

/// Update hooks the controller drives after every mutation.
///
/// Implementations decide how to render; a view that has not been opened
/// yet is free to ignore `set_records` and `set_summary_label`.
pub trait View {
    /// The record browser was requested.
    fn show_browser(&mut self);

    fn set_records(&mut self, records: &[Record]);

    fn set_summary_label(&mut self, label: &str);
}
