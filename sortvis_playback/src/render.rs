use sortvis_orst::Snapshot;

use crate::RunId;

/// Paints frames. Implemented by whatever presents the animation.
pub trait Renderer {
    fn render(&mut self, run: RunId, frame: &Snapshot<i64>);

    /// Paints the final, sorted frame of `run`.
    fn finish(&mut self, run: RunId, frame: &Snapshot<i64>) {
        self.render(run, frame)
    }
}
