use super::state::RecentlyClosedFragmentState;

/// Rendering side of the screen, implemented by the host toolkit.
pub trait RecentlyClosedFragmentView: Send + 'static {
    fn update(&mut self, state: &RecentlyClosedFragmentState);

    /// The options menu depends on the selection; rebuild it.
    fn invalidate_menu(&mut self);
}
