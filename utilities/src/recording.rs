use sortvis_orst::{Observer, Snapshot};
use sortvis_playback::{RunId, Renderer};

/// Observer that keeps every snapshot it is given.
#[derive(Debug, Default)]
pub struct Recorder {
    pub frames: Vec<Snapshot<i64>>,
}

impl Observer<i64> for Recorder {
    fn observe(&mut self, snapshot: Snapshot<i64>) {
        self.frames.push(snapshot);
    }
}

/// Renderer that keeps every frame it is asked to paint.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<(RunId, Vec<i64>)>,
    pub finished: Option<(RunId, Vec<i64>)>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, run: RunId, frame: &Snapshot<i64>) {
        self.frames.push((run, frame.to_vec()));
    }

    fn finish(&mut self, run: RunId, frame: &Snapshot<i64>) {
        self.finished = Some((run, frame.to_vec()));
    }
}
