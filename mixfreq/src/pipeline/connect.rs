use mixfreq_types::MixfreqError;

use crate::Mixfreq;

impl Mixfreq {
    /// Connect the source, retrying exactly once after `connect_retry_delay`.
    ///
    /// # Errors
    /// Returns `Connection` if both attempts fail.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "mixfreq::pipeline::connect",
            skip(self),
            fields(source = self.source.name()),
        )
    )]
    pub(crate) async fn connect_with_retry(&self) -> Result<(), MixfreqError> {
        let Err(first) = self.source.connect().await else {
            return Ok(());
        };
        #[cfg(feature = "tracing")]
        tracing::warn!(
            error = %first,
            retry_in_ms = u64::try_from(self.cfg.connect_retry_delay.as_millis()).unwrap_or(u64::MAX),
            "connect failed; retrying once"
        );
        tokio::time::sleep(self.cfg.connect_retry_delay).await;

        self.source
            .connect()
            .await
            .map_err(|e| fatal_connect_error(self.source.name(), &first, e))
    }
}

/// Collapse two failed connect attempts into one fatal `Connection` error.
fn fatal_connect_error(
    source: &str,
    first: &MixfreqError,
    second: MixfreqError,
) -> MixfreqError {
    match second {
        MixfreqError::Connection { source_name, msg } => MixfreqError::Connection {
            source_name,
            msg: format!("{msg} (first attempt: {first})"),
        },
        other => MixfreqError::connection(source, format!("{other} (first attempt: {first})")),
    }
}
