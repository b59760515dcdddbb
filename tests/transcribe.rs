use verbatim::audio::{AudioBuffer, TARGET_SAMPLE_RATE};
use verbatim::backend::InferenceBackend;
use verbatim::opts::Opts;
use verbatim::segments::Segment;
use verbatim::session::Session;
use verbatim::timed_encoder::TimedEncoder;
use verbatim::{Error, Result};

/// A backend that echoes one fixed segment per chunk, recording call shapes.
///
/// Timestamps span the chunk it was handed, so session-level offsetting can
/// be asserted end to end.
struct EchoBackend {
    text: &'static str,
    calls: Vec<usize>,
    fail_on_call: Option<usize>,
}

impl EchoBackend {
    fn new(text: &'static str) -> Self {
        Self {
            text,
            calls: Vec::new(),
            fail_on_call: None,
        }
    }

    fn failing_on(text: &'static str, call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::new(text)
        }
    }
}

impl InferenceBackend for EchoBackend {
    fn transcribe_chunk(&mut self, samples: &[f32], _opts: &Opts) -> Result<Vec<Segment>> {
        let call = self.calls.len();
        self.calls.push(samples.len());

        if self.fail_on_call == Some(call) {
            return Err(Error::Inference(format!("stub failure on chunk {call}")));
        }

        Ok(vec![Segment {
            start_seconds: 0.0,
            end_seconds: samples.len() as f32 / TARGET_SAMPLE_RATE as f32,
            text: format!("{} {}", self.text, call),
        }])
    }
}

fn one_second_buffer() -> AudioBuffer {
    AudioBuffer::from_samples(vec![0.0; TARGET_SAMPLE_RATE as usize])
}

#[test]
fn whole_file_mode_feeds_a_single_chunk() -> anyhow::Result<()> {
    let mut session = Session::with_backend(EchoBackend::new("chunk"));
    session.transcribe(&one_second_buffer(), &Opts::default())?;

    assert_eq!(session.backend().calls, vec![TARGET_SAMPLE_RATE as usize]);
    assert_eq!(session.text(), "chunk 0");
    Ok(())
}

#[test]
fn chunked_mode_produces_texts_in_chunk_order() -> anyhow::Result<()> {
    let opts = Opts {
        // 300ms chunks over 1s of audio: 4800 + 4800 + 4800 + 1600 samples.
        chunk_samples: Some(4_800),
        ..Opts::default()
    };

    let mut session = Session::with_backend(EchoBackend::new("part"));
    session.transcribe(&one_second_buffer(), &opts)?;

    assert_eq!(session.backend().calls, vec![4_800, 4_800, 4_800, 1_600]);
    assert_eq!(session.text(), "part 0 part 1 part 2 part 3");
    Ok(())
}

#[test]
fn segment_timestamps_are_offset_by_chunk_starts() -> anyhow::Result<()> {
    let opts = Opts {
        chunk_samples: Some(TARGET_SAMPLE_RATE as usize / 4), // 250ms
        ..Opts::default()
    };

    let mut session = Session::with_backend(EchoBackend::new("part"));
    session.transcribe(&one_second_buffer(), &opts)?;

    let starts: Vec<f32> = session.segments().iter().map(|s| s.start_seconds).collect();
    assert_eq!(starts, vec![0.0, 0.25, 0.5, 0.75]);

    let ends: Vec<f32> = session.segments().iter().map(|s| s.end_seconds).collect();
    assert_eq!(ends, vec![0.25, 0.5, 0.75, 1.0]);
    Ok(())
}

#[test]
fn a_chunk_failure_aborts_the_whole_run() {
    let opts = Opts {
        chunk_samples: Some(4_800),
        ..Opts::default()
    };

    let mut session = Session::with_backend(EchoBackend::failing_on("part", 1));
    let err = session.transcribe(&one_second_buffer(), &opts).unwrap_err();

    assert!(matches!(err, Error::Inference(_)), "got: {err}");
    // The failing chunk was the second call; nothing after it ran.
    assert_eq!(session.backend().calls.len(), 2);
}

#[test]
fn a_zero_chunk_size_is_rejected() {
    let opts = Opts {
        chunk_samples: Some(0),
        ..Opts::default()
    };

    let mut session = Session::with_backend(EchoBackend::new("part"));
    let err = session.transcribe(&one_second_buffer(), &opts).unwrap_err();
    assert!(err.to_string().contains("at least one sample"));
}

#[test]
fn repeated_runs_produce_identical_output() -> anyhow::Result<()> {
    let opts = Opts {
        chunk_samples: Some(4_800),
        ..Opts::default()
    };

    let run = |buffer: &AudioBuffer| -> Result<String> {
        let mut session = Session::with_backend(EchoBackend::new("same"));
        session.transcribe(buffer, &opts)?;
        Ok(session.text())
    };

    let buffer = one_second_buffer();
    assert_eq!(run(&buffer)?, run(&buffer)?);
    Ok(())
}

#[test]
fn empty_buffers_produce_an_empty_transcript() -> anyhow::Result<()> {
    let mut session = Session::with_backend(EchoBackend::new("never"));
    session.transcribe(&AudioBuffer::default(), &Opts::default())?;

    assert!(session.backend().calls.is_empty());
    assert!(session.segments().is_empty());
    assert_eq!(session.text(), "");
    Ok(())
}

#[test]
fn write_to_renders_timed_lines_in_chunk_order() -> anyhow::Result<()> {
    let opts = Opts {
        chunk_samples: Some(TARGET_SAMPLE_RATE as usize / 2),
        ..Opts::default()
    };

    let mut session = Session::with_backend(EchoBackend::new("half"));
    session.transcribe(&one_second_buffer(), &opts)?;

    let mut out = Vec::new();
    let mut encoder = TimedEncoder::new(&mut out);
    session.write_to(&mut encoder)?;

    let rendered = String::from_utf8(out)?;
    assert_eq!(
        rendered,
        "[  0.00 ->   0.50] half 0\n[  0.50 ->   1.00] half 1\n"
    );
    Ok(())
}
