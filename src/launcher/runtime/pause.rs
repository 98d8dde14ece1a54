use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::lib::errors::LaunchError;

pub const PAUSE_PROMPT: &str = "Press Enter to continue . . . ";

/// Show the pause prompt and block until a line or end of input arrives.
pub async fn wait_for_acknowledgment<R, W>(reader: &mut R, writer: &mut W) -> Result<(), LaunchError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(PAUSE_PROMPT.as_bytes())
        .await
        .map_err(LaunchError::console)?;
    writer.flush().await.map_err(LaunchError::console)?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .await
        .map_err(LaunchError::console)?;
    if read == 0 {
        // No trailing newline from the user on EOF; keep the console tidy.
        writer.write_all(b"\n").await.map_err(LaunchError::console)?;
        writer.flush().await.map_err(LaunchError::console)?;
    }
    Ok(())
}
