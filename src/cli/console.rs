//! Line-oriented console runtime: JSON in, JSON out.

use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::actions::ActionRequest;
use crate::runtime::{ActivitySink, Bot, FeedbackEvent};
use crate::types::ActionResult;

/// One console input line.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ConsoleLine {
    Feedback { feedback: FeedbackEvent },
    Action(ActionRequest),
}

/// Serve lines until EOF, writing one output line per non-blank input line.
///
/// Action results are written verbatim; a turn fault writes `null` (the
/// user-facing apology goes to `sink`); feedback writes `{"recorded":true}`;
/// undecodable input writes an error object.
pub async fn serve_lines<R, W>(bot: &Bot, sink: &dyn ActivitySink, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let output = match serde_json::from_str::<ConsoleLine>(line) {
            Ok(ConsoleLine::Action(request)) => bot
                .invoke_action(sink, &request)
                .await
                .unwrap_or_else(|| "null".to_string()),
            Ok(ConsoleLine::Feedback { feedback }) => {
                bot.on_feedback(&feedback);
                r#"{"recorded":true}"#.to_string()
            }
            Err(e) => ActionResult::error(format!("Invalid console input: {e}"))
                .to_json()
                .map_err(std::io::Error::other)?,
        };

        writer.write_all(output.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}
