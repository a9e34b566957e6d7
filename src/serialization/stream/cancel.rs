/*!
 * Stream Cancellation
 * Races a stream operation against a caller signal or deadline
 */

use crate::core::{CodecError, CodecResult};
use std::future::Future;
use std::time::Duration;
use tracing::instrument;

/// Run `operation` until it finishes or `signal` resolves
///
/// The operation is polled first, so a result that is ready in the same poll
/// as the signal wins. On cancellation, bytes already written stay written.
pub async fn until<F, S, T>(operation: F, signal: S) -> CodecResult<T>
where
    F: Future<Output = CodecResult<T>>,
    S: Future<Output = ()>,
{
    tokio::select! {
        biased;
        result = operation => result,
        () = signal => Err(CodecError::Cancelled),
    }
}

/// Run `operation` with a deadline; expiry maps to `CodecError::Cancelled`
#[instrument(level = "trace", skip(operation))]
pub async fn within<F, T>(operation: F, deadline: Duration) -> CodecResult<T>
where
    F: Future<Output = CodecResult<T>>,
{
    match tokio::time::timeout(deadline, operation).await {
        Ok(result) => result,
        Err(_) => Err(CodecError::Cancelled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[tokio::test]
    async fn test_until_completes_when_signal_pending() {
        let result = until(async { Ok(7) }, futures::future::pending()).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_until_cancels() {
        let result: CodecResult<()> =
            until(futures::future::pending(), futures::future::ready(())).await;
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Cancelled);
    }

    #[tokio::test]
    async fn test_ready_operation_beats_ready_signal() {
        let result = until(async { Ok("done") }, async {}).await;
        assert_eq!(result.unwrap(), "done");
    }

    #[tokio::test(start_paused = true)]
    async fn test_within_deadline() {
        let result: CodecResult<()> =
            within(futures::future::pending(), Duration::from_millis(50)).await;
        assert!(result.unwrap_err().is_cancelled());

        let result = within(async { Ok(1) }, Duration::from_millis(50)).await;
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_cancellation_emits_no_events() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;
        use tracing_subscriber::layer::{Context, SubscriberExt};

        struct EventCounter(Arc<AtomicUsize>);

        impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCounter {
            fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let events = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(EventCounter(Arc::clone(&events)));

        tracing::subscriber::with_default(subscriber, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();
            runtime.block_on(async {
                let result: CodecResult<()> =
                    until(futures::future::pending(), futures::future::ready(())).await;
                assert!(result.unwrap_err().is_cancelled());

                let result: CodecResult<()> =
                    within(futures::future::pending(), Duration::from_millis(1)).await;
                assert!(result.unwrap_err().is_cancelled());
            });
        });

        assert_eq!(events.load(Ordering::SeqCst), 0);
    }
}
