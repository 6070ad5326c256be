//! Copy strategy executors
//!
//! Each executor reports its lifecycle through `emit` and returns whether it
//! copied the target. Executors never return an error: every failure becomes
//! a `CopyEvent::Failed` and a `false` result.

use super::blob::ClipboardPayload;
use super::errors::ClipboardError;
use super::method::CopyMethod;
use super::platform::ClipboardPlatform;
use super::status::CopyEvent;
use super::target::CopyTarget;

/// Run the executor for `method`
pub async fn execute<P>(
    method: CopyMethod,
    platform: &P,
    target: &CopyTarget,
    emit: &dyn Fn(CopyEvent),
) -> bool
where
    P: ClipboardPlatform + ?Sized,
{
    match method {
        CopyMethod::Clipboard => copy_with_clipboard(platform, target, emit).await,
        CopyMethod::ExecCommand => copy_with_exec_command(platform, target, emit),
    }
}

/// Modern strategy: typed clipboard item through the async clipboard write
pub async fn copy_with_clipboard<P>(
    platform: &P,
    target: &CopyTarget,
    emit: &dyn Fn(CopyEvent),
) -> bool
where
    P: ClipboardPlatform + ?Sized,
{
    emit(CopyEvent::Started);

    if !platform.supports_modern_write().await {
        log::warn!("Async clipboard write unavailable");
        emit(CopyEvent::Failed(ClipboardError::unsupported(
            "async clipboard write is unavailable",
        )));
        return false;
    }

    let payload = ClipboardPayload::encode(target);
    match platform.write(&payload).await {
        Ok(()) => {
            log::info!("Copied text by clipboard ({})", payload.mime_types().join(", "));
            emit(CopyEvent::Succeeded);
            true
        }
        Err(e) => {
            log::warn!("Clipboard write failed: {}", e);
            emit(CopyEvent::Failed(e));
            false
        }
    }
}

/// Legacy strategy: hidden selection plus the document copy command
///
/// The staged node is removed before the terminal event on every path.
pub fn copy_with_exec_command<P>(
    platform: &P,
    target: &CopyTarget,
    emit: &dyn Fn(CopyEvent),
) -> bool
where
    P: ClipboardPlatform + ?Sized,
{
    emit(CopyEvent::Started);

    let selection = match platform.select_text(target.plain_text()) {
        Ok(guard) => guard,
        Err(e) => {
            log::warn!("Failed to stage selection: {}", e);
            emit(CopyEvent::Failed(e));
            return false;
        }
    };

    let result = platform.exec_copy();
    selection.cancel();

    match result {
        Ok(true) => {
            log::info!("Copied text by execCommand");
            emit(CopyEvent::Succeeded);
            true
        }
        Ok(false) => {
            log::warn!("Copy command rejected");
            emit(CopyEvent::Failed(ClipboardError::unsupported(
                "copy command was rejected",
            )));
            false
        }
        Err(e) => {
            log::warn!("Copy command failed: {}", e);
            emit(CopyEvent::Failed(e));
            false
        }
    }
}
