use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};

use glassbar::bridge::{JsonMethodCodec, MethodCall, ViewId, METHOD_SET_SELECTED_INDEX};
use glassbar::config::Config;
use glassbar::embedding::{CreationParams, EmbeddingFactory};
use glassbar::logging::init_tracing;
use glassbar::ui::Rect;

/// Embed one glass selector and drive it with scripted taps and host calls.
///
/// Every step prints one JSON line: what the host received and what it
/// got back.
#[derive(Parser, Debug)]
#[command(name = "glassbar", version)]
struct Cli {
    /// Config file (default: <config dir>/glassbar/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host-assigned id of the embedded view
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    view_id: i64,

    /// Width of the embedding frame
    #[arg(long, default_value_t = 320.0)]
    width: f64,

    /// Height of the embedding frame
    #[arg(long, default_value_t = 64.0)]
    height: f64,

    /// Steps to run in order: tap=<index>, set=<json>, call=<method>[=<json>]
    steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq)]
enum Step {
    Tap(usize),
    Call(MethodCall),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = s.split_once('=').unwrap_or((s, ""));
        match kind {
            "tap" => rest
                .parse()
                .map(Step::Tap)
                .map_err(|_| format!("tap needs a button index, got '{}'", rest)),
            "set" if !rest.is_empty() => Ok(Step::Call(MethodCall::new(
                METHOD_SET_SELECTED_INDEX,
                parse_args(rest),
            ))),
            "call" if !rest.is_empty() => {
                let (method, args) = rest.split_once('=').unwrap_or((rest, ""));
                let args = if args.is_empty() {
                    Value::Null
                } else {
                    parse_args(args)
                };
                Ok(Step::Call(MethodCall::new(method, args)))
            }
            _ => Err(format!(
                "unknown step '{}', expected tap=<index>, set=<json> or call=<method>[=<json>]",
                s
            )),
        }
    }
}

/// Bare words that are not JSON are sent as strings.
fn parse_args(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    let factory = EmbeddingFactory::new(config);
    let view_id = ViewId(cli.view_id);
    let channel = factory.channel_for(view_id);
    let mut view = factory
        .create(CreationParams::new(
            view_id,
            Rect::new(0.0, 0.0, cli.width, cli.height),
        ))
        .context("Failed to embed selector")?;

    for step in cli.steps {
        match step {
            Step::Tap(index) => {
                view.tap(index)?;
                let outbound = view.host_mut().next_message().await;
                println!(
                    "{}",
                    json!({ "step": "tap", "index": index, "outbound": outbound })
                );
            }
            Step::Call(call) => {
                let request = JsonMethodCodec::encode_method_call(&call)?;
                let reply = factory.handle_message(&channel, &request).await?;
                let envelope: Value = serde_json::from_slice(&reply)?;
                println!(
                    "{}",
                    json!({
                        "step": "call",
                        "method": call.method,
                        "args": call.args,
                        "reply": envelope,
                        "outbound": view.host_mut().try_next_message(),
                    })
                );
            }
        }
    }

    let snapshot = view.view().snapshot();
    println!(
        "{}",
        json!({
            "channel": channel,
            "selected": snapshot.active_index(),
            "frames_applied": snapshot.frames_applied,
            "impacts": snapshot.impacts,
        })
    );

    factory.dispose_all().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tap() {
        assert_eq!("tap=2".parse::<Step>(), Ok(Step::Tap(2)));
        assert!("tap=x".parse::<Step>().is_err());
        assert!("tap".parse::<Step>().is_err());
    }

    #[test]
    fn parses_set_with_json_or_bare_word() {
        assert_eq!(
            "set=2".parse::<Step>(),
            Ok(Step::Call(MethodCall::set_selected_index(2)))
        );
        assert_eq!(
            "set=abc".parse::<Step>(),
            Ok(Step::Call(MethodCall::new(METHOD_SET_SELECTED_INDEX, json!("abc"))))
        );
    }

    #[test]
    fn parses_call_with_optional_args() {
        assert_eq!(
            "call=getSelectedIndex".parse::<Step>(),
            Ok(Step::Call(MethodCall::new("getSelectedIndex", Value::Null)))
        );
        assert_eq!(
            "call=setSelectedIndex=1".parse::<Step>(),
            Ok(Step::Call(MethodCall::set_selected_index(1)))
        );
    }

    #[test]
    fn rejects_unknown_step() {
        assert!("swipe=1".parse::<Step>().is_err());
        assert!("set=".parse::<Step>().is_err());
    }
}
