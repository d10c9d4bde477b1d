use clap::ValueEnum;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::Layer;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Verbosity {
    Info,
    Debug,
}

pub struct Fmt;

impl Fmt {
    /// Log layer writing to stderr, stdout being reserved to the results
    pub fn layer<S>(verbosity: &Verbosity) -> impl Layer<S>
    where
        S: for<'span> tracing_subscriber::registry::LookupSpan<'span> + tracing::Subscriber,
    {
        let filter = match verbosity {
            Verbosity::Info => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
        };

        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .compact()
            .with_filter(filter)
    }
}
