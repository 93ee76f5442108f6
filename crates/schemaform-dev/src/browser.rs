//! Browser side effects, run through `document::eval`.

use anyhow::anyhow;
use dioxus::prelude::*;
use schemaform::ResultRecord;
use schemaform::export::{self, ExportedRecord};

/// Quote `text` as a JavaScript string literal.
fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

async fn run(script: String) -> anyhow::Result<()> {
    document::eval(&script)
        .await
        .map(|_| ())
        .map_err(|e| anyhow!("{e}"))
}

pub async fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    run(format!(
        "await navigator.clipboard.writeText({}); return true;",
        js_string(text)
    ))
    .await
}

/// Hand an export artifact to the browser as a file download.
pub async fn download(artifact: &ExportedRecord) -> anyhow::Result<()> {
    run(format!(
        r#"
        const blob = new Blob([{contents}], {{ type: {mime} }});
        const url = URL.createObjectURL(blob);
        const link = document.createElement("a");
        link.href = url;
        link.download = {name};
        document.body.appendChild(link);
        link.click();
        document.body.removeChild(link);
        URL.revokeObjectURL(url);
        return true;
        "#,
        contents = js_string(&artifact.contents),
        mime = js_string(artifact.mime_type),
        name = js_string(&artifact.file_name),
    ))
    .await
}

pub async fn download_record(record: ResultRecord) -> anyhow::Result<()> {
    let artifact = export::export(&record, &export::Config::default())?;
    download(&artifact).await
}

pub async fn sleep_ms(millis: u32) {
    if let Err(e) = run(format!(
        "await new Promise((resolve) => setTimeout(resolve, {millis})); return true;"
    ))
    .await
    {
        tracing::warn!("timer failed: {e}");
    }
}
