/*!
Reporting the outcome of a split.

The splitting pipeline hands its summary to a [`Reporter`] instead of logging
directly, so callers decide where the summary ends up.
*/

use std::path::{Path, PathBuf};

use log::info;

/// Outcome of splitting one input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitSummary {
    /// File that was split.
    input: PathBuf,
    /// Directory the chunks were written to.
    output_dir: PathBuf,
    /// Written files, in chunk order.
    files: Vec<PathBuf>,
}

impl SplitSummary {
    pub(crate) fn new(input: PathBuf, output_dir: PathBuf, files: Vec<PathBuf>) -> Self {
        Self {
            input,
            output_dir,
            files,
        }
    }

    /// File that was split.
    #[must_use]
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Directory the chunks were written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Paths of the written files, in chunk order.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of files written.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Receives the summary of each completed split.
pub trait Reporter {
    /// Called once all chunks of an input have been written.
    fn report(&self, summary: &SplitSummary);
}

/// Logs the summary at info level through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, summary: &SplitSummary) {
        info!(
            "Split {} into {} files. Saved to {}",
            summary.input().display(),
            summary.file_count(),
            summary.output_dir().display()
        );
    }
}

/// Discards the summary.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&self, _summary: &SplitSummary) {}
}

impl<R> Reporter for &R
where
    R: Reporter + ?Sized,
{
    fn report(&self, summary: &SplitSummary) {
        (**self).report(summary);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recording(RefCell<Vec<SplitSummary>>);

    impl Reporter for Recording {
        fn report(&self, summary: &SplitSummary) {
            self.0.borrow_mut().push(summary.clone());
        }
    }

    #[test]
    fn summary_counts_files() {
        let summary = SplitSummary::new(
            "in.txt".into(),
            "out".into(),
            vec!["out/in_split0.txt".into(), "out/in_split1.txt".into()],
        );
        assert_eq!(summary.file_count(), 2);
        assert_eq!(summary.input(), Path::new("in.txt"));
        assert_eq!(summary.output_dir(), Path::new("out"));
    }

    #[test]
    fn references_forward_reports() {
        fn send(reporter: impl Reporter, summary: &SplitSummary) {
            reporter.report(summary);
        }

        let recording = Recording::default();
        let summary = SplitSummary::new("in.txt".into(), "out".into(), vec![]);
        send(&recording, &summary);

        assert_eq!(recording.0.borrow().as_slice(), &[summary]);
    }
}
