use crate::core::{
    loader::{
        CancellationToken, LoadError, LoadRequest, LoaderMsg, NoteSource, parse_notes, run_load,
        spawn_loader,
    },
    note::Note,
};
use crossbeam::channel::{Receiver, bounded, unbounded};
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(5);

struct FixedSource(Result<Vec<Note>, LoadError>);

impl NoteSource for FixedSource {
    fn fetch(&self, _request: &LoadRequest) -> Result<Vec<Note>, LoadError> {
        self.0.clone()
    }
}

/// Blocks until the test lets it answer
struct GatedSource(Receiver<()>);

impl NoteSource for GatedSource {
    fn fetch(&self, _request: &LoadRequest) -> Result<Vec<Note>, LoadError> {
        let _ = self.0.recv_timeout(WAIT);
        Ok(vec![])
    }
}

fn sample_note() -> Note {
    Note {
        start: 0.,
        end: 1.,
        pitch: 60,
        velocity: 100,
    }
}

#[test]
fn test_parse_notes() {
    let body = r#"[
        {"start": 0.0, "end": 0.5, "pitch": 60, "velocity": 100},
        {"start": 0.5, "end": 1.0, "pitch": 62, "velocity": 80}
    ]"#;
    let notes = parse_notes(body).unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[1].pitch, 62);
}

#[test]
fn test_parse_malformed() {
    assert!(matches!(
        parse_notes(r#"{"notes": []}"#),
        Err(LoadError::MalformedData(_))
    ));
    assert!(matches!(
        parse_notes(r#"[{"start": 0.0, "end": 0.5, "pitch": 60, "velocity": -1}]"#),
        Err(LoadError::MalformedData(_))
    ));
}

#[test]
fn test_spawn_loader_success() {
    let handle = spawn_loader(FixedSource(Ok(vec![sample_note()])), LoadRequest::default());
    match handle.rx.recv_timeout(WAIT) {
        Ok(LoaderMsg::Loaded(notes)) => assert_eq!(notes, vec![sample_note()]),
        _ => panic!("expected loaded notes"),
    }
}

#[test]
fn test_spawn_loader_failure() {
    let handle = spawn_loader(
        FixedSource(Err(LoadError::Http { status: 503 })),
        LoadRequest::default(),
    );
    match handle.rx.recv_timeout(WAIT) {
        Ok(LoaderMsg::Failed(err)) => {
            assert_eq!(err, LoadError::Http { status: 503 });
            assert_eq!(err.to_string(), "HTTP error! Status: 503");
        }
        _ => panic!("expected a failure"),
    }
}

#[test]
fn test_cancel_drops_late_result() {
    let (go_tx, go_rx) = bounded(1);
    let handle = spawn_loader(GatedSource(go_rx), LoadRequest::default());
    assert!(handle.poll().is_none());
    handle.cancel();
    // The worker may already be gone if it saw the cancel before fetching
    let _ = go_tx.send(());
    assert!(matches!(
        handle.rx.recv_timeout(WAIT),
        Ok(LoaderMsg::Cancelled)
    ));
}

#[test]
fn test_cancelled_before_start_skips_fetch() {
    let (tx, rx) = unbounded();
    let token = CancellationToken::default();
    token.cancel();
    // Would fail the test through a Failed message if it were fetched
    let source = FixedSource(Err(LoadError::Transport("unreachable".into())));
    run_load(&source, &LoadRequest::default(), &token, &tx);
    assert!(matches!(rx.try_recv(), Ok(LoaderMsg::Cancelled)));
}

#[test]
fn test_default_request() {
    let request = LoadRequest::default();
    assert_eq!(request.endpoint, "https://pianoroll.ai/random_notes");
    assert_eq!(request.timeout, Duration::from_secs(10));
}
