#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use futures::FutureExt;
    use serde_json::{Value, json};
    use tokio::sync::oneshot;

    use crate::autocomplete::Autocomplete;
    use crate::config::AutocompleteConfig;
    use crate::error::LookupError;
    use crate::lookup::{LookupFuture, LookupService};

    pub const DEBOUNCE: Duration = Duration::from_millis(300);
    pub const GRACE: Duration = Duration::from_millis(200);

    enum Reply {
        Ready(Result<Value, LookupError>),
        Deferred(oneshot::Receiver<Result<Value, LookupError>>),
    }

    /// Lookup service fake with per-query replies
    ///
    /// Queries without a scripted reply never resolve.
    #[derive(Default)]
    pub struct ScriptedLookup {
        calls: Mutex<Vec<String>>,
        replies: Mutex<HashMap<String, Reply>>,
    }

    impl ScriptedLookup {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        /// Answer `query` immediately with `payload`
        pub fn respond(&self, query: &str, payload: Value) {
            self.replies
                .lock()
                .unwrap()
                .insert(query.to_string(), Reply::Ready(Ok(payload)));
        }

        /// Answer `query` immediately with an error
        pub fn fail(&self, query: &str, error: LookupError) {
            self.replies
                .lock()
                .unwrap()
                .insert(query.to_string(), Reply::Ready(Err(error)));
        }

        /// Answer `query` whenever the returned sender is used
        pub fn defer(&self, query: &str) -> oneshot::Sender<Result<Value, LookupError>> {
            let (tx, rx) = oneshot::channel();
            self.replies
                .lock()
                .unwrap()
                .insert(query.to_string(), Reply::Deferred(rx));
            tx
        }

        /// Queries received so far, in order
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl LookupService for ScriptedLookup {
        fn lookup(&self, query: &str) -> LookupFuture {
            self.calls.lock().unwrap().push(query.to_string());
            let reply = self.replies.lock().unwrap().remove(query);

            async move {
                match reply {
                    Some(Reply::Ready(result)) => result,
                    Some(Reply::Deferred(rx)) => rx
                        .await
                        .unwrap_or_else(|_| Err(LookupError::Network("reply dropped".to_string()))),
                    None => std::future::pending().await,
                }
            }
            .boxed()
        }
    }

    pub fn alice_and_alan() -> Value {
        json!({"results": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Alan"}]})
    }

    /// Controller with default timings on the current runtime
    pub fn test_autocomplete(lookup: Arc<ScriptedLookup>) -> Autocomplete {
        Autocomplete::new(
            lookup,
            tokio::runtime::Handle::current(),
            &AutocompleteConfig::default(),
        )
    }

    /// Focus the input, type `text`, let the debounce elapse and wait for the
    /// lookup to land
    pub async fn search_and_wait(ac: &mut Autocomplete, text: &str, now: Instant) -> Instant {
        ac.on_focus();
        ac.on_text_changed(text, now);
        let fired_at = now + DEBOUNCE;
        ac.tick(fired_at);
        let applied = tokio::time::timeout(Duration::from_secs(2), ac.wait_for_fetch())
            .await
            .expect("lookup did not complete in time");
        assert!(applied, "lookup for {:?} produced nothing to apply", text);
        fired_at
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
