//! Routes yt-dlp log output so it cannot interleave with a live progress
//! bar. The extractor feeds raw stderr lines in here; anything worth
//! showing goes through the registered sink.

/// Destination for emitted log lines. The default sink is stderr; a
/// progress bar registers its safe-write here instead.
pub trait LogSink {
    fn log_line(&mut self, line: &str);
}

pub struct StderrSink;

impl LogSink for StderrSink {
    fn log_line(&mut self, line: &str) {
        eprintln!("{}", line);
    }
}

/// Messages about the optional ffmpeg dependency are expected when only
/// listing metadata, so they are dropped instead of shown.
const BENIGN_WARNING: &str = "ffmpeg not found";

pub struct YtDlpLog {
    sink: Box<dyn LogSink>,
}

impl YtDlpLog {
    pub fn new() -> Self {
        YtDlpLog {
            sink: Box::new(StderrSink),
        }
    }

    pub fn with_sink(sink: Box<dyn LogSink>) -> Self {
        YtDlpLog { sink }
    }

    pub fn debug(&mut self, _msg: &str) {}

    pub fn info(&mut self, _msg: &str) {}

    pub fn warning(&mut self, msg: &str) {
        if msg.contains(BENIGN_WARNING) {
            return;
        }
        self.sink.log_line(&format!("WARNING: {}", msg));
    }

    pub fn error(&mut self, msg: &str) {
        self.sink.log_line(&format!("ERROR: {}", msg));
    }

    /// Classifies one raw stderr line from the yt-dlp process by its
    /// severity prefix and dispatches it.
    pub fn consume_stderr_line(&mut self, line: &str) {
        if let Some(msg) = line.strip_prefix("WARNING:") {
            self.warning(msg.trim_start());
        } else if let Some(msg) = line.strip_prefix("ERROR:") {
            self.error(msg.trim_start());
        } else {
            self.debug(line);
        }
    }
}
