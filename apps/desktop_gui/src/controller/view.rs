/// Everything the controller needs from the window it drives.
pub trait GeneratorView {
    /// Switches the submit control between its idle and loading look.
    fn set_generating(&mut self, generating: bool);
    fn focus_character_input(&mut self);
    /// Replaces the output area with `headcanons`, in order.
    fn show_headcanons(&mut self, character: &str, headcanons: &[String]);
    /// Replaces the output area with a single error entry.
    fn show_error(&mut self, message: &str);
    fn scroll_output_into_view(&mut self);
    /// Results currently on screen, or `None` when nothing (or an error) is shown.
    fn displayed_headcanons(&self) -> Option<(&str, &[String])>;
    fn set_copy_confirmed(&mut self, confirmed: bool);
    fn show_notice(&mut self, message: &str);
}
