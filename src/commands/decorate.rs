//! Decorate command handler

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};

use avro_decorator::domain::ports::{CancelPrompter, EndpointPrompter};
use avro_decorator::infrastructure::{SchemaRegistryFactory, TerminalPrompter, TerminalShell};
use avro_decorator::{
    bootstrap, DecoratorSettings, MessageDecorator, RawMessage, DISPLAY_NAME, MISSING_ENDPOINT,
};

pub struct DecorateArgs {
    pub cluster: String,
    pub topic: String,
    pub broker: String,
    pub partition: i64,
    pub offset: i64,
    pub hex: bool,
    pub file: Option<PathBuf>,
}

pub fn cmd_decorate(settings: &DecoratorSettings, args: DecorateArgs, json: bool) -> Result<ExitCode> {
    let raw = read_payload(args.file.as_ref())?;
    let payload = if args.hex {
        decode_hex(&raw)?
    } else {
        raw
    };

    let prompter: Arc<dyn EndpointPrompter> = if settings.interactive {
        Arc::new(TerminalPrompter::new())
    } else {
        Arc::new(CancelPrompter)
    };
    let runtime = bootstrap(
        settings,
        prompter,
        Arc::new(TerminalShell::new()),
        Arc::new(SchemaRegistryFactory::new()),
    )?;

    let message = RawMessage::new(&args.cluster, &args.topic, &payload)
        .with_broker(&args.broker)
        .with_position(args.partition, args.offset);

    let mut text = runtime.decorator.decorate(&message);
    if text == MISSING_ENDPOINT && settings.interactive {
        // The prompt runs on the UI thread; retry once it has been answered.
        runtime.dispatcher.flush()?;
        text = runtime.decorator.decorate(&message);
    }
    runtime.dispatcher.shutdown();

    let status = if text == MISSING_ENDPOINT {
        "missing_endpoint"
    } else if text.starts_with("Error: ") {
        "error"
    } else {
        "ok"
    };

    if json {
        super::emit_json(&serde_json::json!({
            "event": "decorated",
            "decorator": DISPLAY_NAME,
            "cluster": args.cluster,
            "topic": args.topic,
            "partition": args.partition,
            "offset": args.offset,
            "status": status,
            "text": text,
        }))?;
    } else {
        println!("{}", text);
    }

    Ok(if status == "ok" {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_payload(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("Failed to read payload from stdin")?;
            Ok(buf)
        }
    }
}

/// Hex text to bytes. Whitespace and one optional `0x` prefix are ignored.
fn decode_hex(raw: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(raw).context("hex payload is not text")?;
    let text = text.trim();
    let digits: String = text
        .strip_prefix("0x")
        .unwrap_or(text)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    hex::decode(&digits).context("invalid hex payload")
}
