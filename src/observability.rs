use anyhow::{Error, Result};
use once_cell::sync::OnceCell;
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Tracing サブスクライバを一度だけ初期化する。
///
/// `RUST_LOG` が設定されていればそちらを優先し、なければ `level` を使う。
/// ログは stderr に出力するため、stdout の出力結果と混ざらない。
///
/// # Errors
/// 別のグローバルサブスクライバが既に登録されている場合はエラーを返す。
pub fn init(level: Level, json: bool) -> Result<()> {
    TRACING_INIT.get_or_try_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

        let registry = tracing_subscriber::registry().with(env_filter);
        let result = if json {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr)
                        .json(),
                )
                .try_init()
        } else {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };
        result.map_err(|e: tracing_subscriber::util::TryInitError| Error::msg(e.to_string()))?;

        tracing::debug!(%level, json, "tracing initialized");
        Ok::<(), Error>(())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        assert!(init(Level::WARN, false).is_ok());
        assert!(init(Level::DEBUG, true).is_ok());
    }
}
