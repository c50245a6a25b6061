use clap::Parser;
use hitokoto_gist::application::UpdateGistService;
use hitokoto_gist::cli::{format_preview, Cli};
use hitokoto_gist::domain::ScriptConversion;
use hitokoto_gist::error::Result;
use hitokoto_gist::infrastructure::{http, Config, GitHubGistClient, HitokotoClient, ZhConverter};
use hitokoto_gist::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Everything is validated before the first request goes out
    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let client = http::build_client(config.timeout)?;
    let quotes = HitokotoClient::new(client.clone(), config.hitokoto_endpoint.clone());
    let converter = ZhConverter::new(ScriptConversion::DEFAULT);
    let gists = GitHubGistClient::new(
        client,
        config.github_api_url.clone(),
        config.gh_token.clone(),
    );
    let service = UpdateGistService::new(quotes, converter, gists);

    if cli.dry_run {
        let content = service.preview(&config)?;
        print!("{}", format_preview(&config.gist_id, &config.file_name, &content));
        return Ok(());
    }

    let outcome = service.execute(&config)?;
    tracing::info!(
        gist = %outcome.gist_id,
        file = %outcome.file_name,
        created = outcome.created_file,
        "done"
    );
    Ok(())
}
