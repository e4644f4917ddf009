use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use comment_box::client::{SubmissionForm, DEFAULT_ENDPOINT};

#[derive(Parser)]
#[command(name = "submit")]
#[command(about = "Send a comment to a comment-box server", long_about = None)]
struct Cli {
    /// Endpoint the form posts to
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    url: String,

    /// Username the comment is stored under
    username: String,

    /// Comment text
    comment: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comment_box=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut form = SubmissionForm::new(cli.url);
    form.set_username(cli.username);
    form.set_comment(cli.comment);

    match form.submit().await {
        Some(response) => {
            println!(
                "{} ({}: {})",
                response.message, response.data.username, response.data.comment
            );
            Ok(())
        }
        None => {
            let message = form.error().unwrap_or("Submission failed");
            anyhow::bail!("Error: {}", message)
        }
    }
}
