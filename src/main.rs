use log::{error, info};
use tokio::io::{self, AsyncBufReadExt, BufReader};

use recipe_finder::app::{parse_input, Input, Message, HELP};
use recipe_finder::{AppConfig, AppError, RecipeFinder};

enum Event {
    Line(Option<String>),
    Completed(Option<Message>),
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run().await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    info!(
        "Using {} with favorites in {}",
        config.api.base_url, config.storage.dir
    );

    let mut app = RecipeFinder::builder().config(&config).build()?;
    let mut lines = BufReader::new(io::stdin()).lines();

    println!("{}\n", HELP);
    app.start();
    println!("{}", app.view());

    loop {
        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line?),
            message = app.next_message() => Event::Completed(message),
        };

        match event {
            Event::Line(None) => break,
            Event::Line(Some(line)) => match parse_input(&line) {
                Input::Quit => break,
                input => {
                    if let Some(feedback) = app.handle_input(input) {
                        println!("{}\n", feedback);
                    }
                }
            },
            Event::Completed(Some(message)) => app.dispatch(message),
            Event::Completed(None) => break,
        }
        println!("{}", app.view());
    }

    Ok(())
}
