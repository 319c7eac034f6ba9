//! AI hint requests.
//!
//! A hint is one JSON POST carrying the player's question and a snapshot of
//! the board. The reply is advisory only and never touches the world.

use cage_engine::LineSegment;
use glam::Vec2;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "http://www.brodieberger.com/ai_hint";

/// Shown when the service answers without a usable `reply`.
pub const NO_REPLY_TEXT: &str = "No reply received.";
/// Shown when the request fails or the body is not JSON.
pub const FAILURE_TEXT: &str = "AI request failed.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Request body sent to the hint service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HintRequest {
    pub user_message: String,
    pub ball: Point,
    pub goal: Point,
    pub lines: Vec<LineSegment>,
}

impl HintRequest {
    pub fn to_json(&self) -> Result<String, HintError> {
        serde_json::to_string(self).map_err(|e| HintError::Parse(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HintError {
    /// The request never produced a response body.
    #[error("network error: {0}")]
    Network(String),
    /// A body came back (or was about to be sent) but was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Called exactly once with the raw response body or the failure.
pub type TransportCallback = Box<dyn FnOnce(Result<String, HintError>)>;

/// Sends a JSON body somewhere and reports back asynchronously.
pub trait HintTransport {
    fn post_json(&self, url: &str, body: String, done: TransportCallback);
}

/// Pull the text to display out of a response body.
pub fn interpret_response(body: &str) -> Result<String, HintError> {
    let value: Value = serde_json::from_str(body).map_err(|e| HintError::Parse(e.to_string()))?;
    let reply = value
        .get("reply")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_REPLY_TEXT);
    Ok(reply.to_string())
}

/// Turn a finished request into display text. Failures are logged here.
pub fn display_text(outcome: Result<String, HintError>) -> String {
    match outcome {
        Ok(text) => text,
        Err(e) => {
            log::error!("hint request failed: {}", e);
            FAILURE_TEXT.to_string()
        }
    }
}

/// Fire-and-forget hint requests. Overlapping requests are not de-duplicated
/// and may complete in any order.
pub struct HintRequester<T: HintTransport> {
    transport: T,
    endpoint: String,
}

impl<T: HintTransport> HintRequester<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    /// Send `request`; `on_reply` receives the text to show.
    pub fn ask(&self, request: &HintRequest, on_reply: impl FnOnce(String) + 'static) {
        let body = match request.to_json() {
            Ok(body) => body,
            Err(e) => {
                on_reply(display_text(Err(e)));
                return;
            }
        };

        log::info!("asking {} for a hint ({} lines)", self.endpoint, request.lines.len());
        self.transport.post_json(
            &self.endpoint,
            body,
            Box::new(move |result| {
                on_reply(display_text(result.and_then(|b| interpret_response(&b))));
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Answers every request immediately with a canned result.
    struct MockTransport {
        response: Result<String, HintError>,
        sent: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl MockTransport {
        fn new(response: Result<String, HintError>) -> Self {
            Self {
                response,
                sent: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl HintTransport for MockTransport {
        fn post_json(&self, url: &str, body: String, done: TransportCallback) {
            self.sent.borrow_mut().push((url.to_string(), body));
            done(self.response.clone());
        }
    }

    fn sample_request() -> HintRequest {
        HintRequest {
            user_message: "how do I win?".into(),
            ball: Point { x: 200.0, y: 150.0 },
            goal: Point { x: 600.0, y: 510.0 },
            lines: vec![LineSegment::new(Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0))],
        }
    }

    type Sent = Rc<RefCell<Vec<(String, String)>>>;

    fn ask_with(response: Result<String, HintError>) -> (String, Sent) {
        let transport = MockTransport::new(response);
        let sent = transport.sent.clone();
        let requester = HintRequester::new(transport, DEFAULT_ENDPOINT);

        let shown = Rc::new(RefCell::new(String::new()));
        let sink = shown.clone();
        requester.ask(&sample_request(), move |text| *sink.borrow_mut() = text);

        let text = shown.borrow().clone();
        (text, sent)
    }

    #[test]
    fn reply_is_shown_verbatim() {
        let (text, _) = ask_with(Ok(r#"{"reply":"try aiming left"}"#.into()));
        assert_eq!(text, "try aiming left");
    }

    #[test]
    fn network_error_shows_failure_text() {
        let (text, _) = ask_with(Err(HintError::Network("connection refused".into())));
        assert_eq!(text, FAILURE_TEXT);
    }

    #[test]
    fn non_json_body_shows_failure_text() {
        let (text, _) = ask_with(Ok("<html>502</html>".into()));
        assert_eq!(text, FAILURE_TEXT);
    }

    #[test]
    fn errors_name_their_kind() {
        assert_eq!(HintError::Network("timeout".into()).to_string(), "network error: timeout");
        let err = interpret_response("not json").unwrap_err();
        assert!(matches!(err, HintError::Parse(_)));
        assert!(err.to_string().starts_with("parse error: "));
    }

    #[test]
    fn missing_or_odd_reply_shows_fallback() {
        for body in [r#"{}"#, r#"{"reply":""}"#, r#"{"reply":42}"#, r#"["reply"]"#, "null"] {
            assert_eq!(interpret_response(body).unwrap(), NO_REPLY_TEXT, "body: {}", body);
        }
    }

    #[test]
    fn payload_matches_service_shape() {
        let (_, sent) = ask_with(Ok("{}".into()));
        let sent = sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, DEFAULT_ENDPOINT);

        let body: Value = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(body["user_message"], "how do I win?");
        assert_eq!(body["ball"]["x"], 200.0);
        assert_eq!(body["goal"]["y"], 510.0);
        assert_eq!(body["lines"][0]["x1"], 100.0);
        assert_eq!(body["lines"][0]["x2"], 200.0);
        assert_eq!(body["lines"].as_array().unwrap().len(), 1);
    }
}
