use std::path::PathBuf;

#[derive(thiserror::Error)]
pub enum Error {
    #[error("could not read corpus file {}", .path.display())]
    CorpusUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not load vocabulary from {location}. Run \"learn\" first.")]
    VocabularyUnavailable {
        location: String,
        #[source]
        source: LoadError,
    },
    #[error("could not write vocabulary to {}", .path.display())]
    VocabularyUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to serialize vocabulary")]
    Serialize(#[from] serde_json::Error),
    #[error("missing argument for `{command}`\n\nUsage: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },
}

/// Why a stored vocabulary could not be used.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("io error")]
    Io(#[from] std::io::Error),
    #[error("invalid vocabulary json")]
    Json(#[from] serde_json::Error),
    #[error("special token {0} is missing")]
    MissingSpecialToken(&'static str),
    #[error("no vocabulary has been saved")]
    Empty,
}

pub(crate) fn format_error(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter,
) -> std::fmt::Result {
    write!(f, "{e}")?;

    let mut source = e.source();

    if e.source().is_some() {
        writeln!(f, "\ncaused by:")?;
        let mut i: usize = 0;
        while let Some(inner) = source {
            writeln!(f, "{i: >5}: {inner}")?;
            source = inner.source();
            i += 1;
        }
    }

    Ok(())
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_error(self, f)
    }
}
