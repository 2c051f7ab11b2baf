use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use krishimitra::models::Language;
use krishimitra::service::SendOutcome;
use krishimitra::speech::{ProcessSpeechEngine, SpeechTransition};
use krishimitra::{AppError, ChatService, Config, HttpChatClient, LanguagePreference, SpeechController};

const HELP: &str = "\
Commands:
  /lang [en|te|hi]   cycle or set the display language
  /examples          show example questions
  /example <n>       ask example question <n>
  /messages          show this conversation
  /speak [n]         read message <n> aloud (default: latest reply), again to stop
  /retry             resend the last message that failed
  /history           show what the backend stored for this session
  /new               start a new conversation
  /quit              exit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "krishimitra=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── Configuration ─────────────────────────────────────────────────────────
    let config = Config::from_env();
    info!("Using chat backend at {}", config.backend_url);

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let preference = LanguagePreference::new(config.initial_language);
    let client = Arc::new(HttpChatClient::new(
        &config.backend_url,
        config.request_timeout,
        config.retry,
    )?);
    let (engine, mut speech_events) = ProcessSpeechEngine::new(config.tts_command.clone());
    let speech = SpeechController::new(Box::new(engine), preference.clone());
    let mut chat = ChatService::new(preference, client.clone(), speech);

    print_header(&chat);
    print_message(&chat, 0);
    print_examples(&chat);

    // ── Input loop ────────────────────────────────────────────────────────────
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_line(&mut chat, &client, line.trim()).await {
                    break;
                }
            }
            Some(event) = speech_events.recv() => chat.handle_speech_event(event),
        }
        for notice in chat.take_notices() {
            eprintln!("[{}] {}", notice.title, notice.body);
        }
    }

    info!("Bye");
    Ok(())
}

/// Returns `false` when the user asked to quit.
async fn handle_line(chat: &mut ChatService, client: &HttpChatClient, line: &str) -> bool {
    let (command, arg) = match line.split_once(' ') {
        Some((c, a)) => (c, a.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "/quit" | "/exit" => return false,
        "/help" => println!("{HELP}"),
        "/lang" => {
            if arg.is_empty() {
                chat.cycle_language();
            } else {
                match Language::from_code(arg) {
                    Some(language) => chat.set_language(language),
                    None => {
                        println!("{}", AppError::UnsupportedLanguage { code: arg.to_string() });
                        return true;
                    }
                }
            }
            print_header(chat);
            print_message(chat, 0);
        }
        "/examples" => print_examples(chat),
        "/example" => {
            let picked = arg
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .is_some_and(|idx| chat.use_example(idx));
            if picked {
                println!("> {}", chat.input());
                send(chat).await;
            } else {
                println!("No such example; try /examples");
            }
        }
        "/messages" => {
            for idx in 0..chat.messages().len() {
                print_message(chat, idx);
            }
        }
        "/speak" => speak(chat, arg),
        "/retry" => {
            if chat.input().trim().is_empty() {
                println!("Nothing to resend");
            } else {
                send(chat).await;
            }
        }
        "/history" => match client.history(chat.session().session_id()).await {
            Ok(history) => {
                for record in history.messages {
                    println!("you: {}", record.message);
                    if let Some(response) = record.response {
                        println!("ai:  {response}");
                    }
                }
            }
            Err(e) => println!("Could not load history: {e}"),
        },
        "/new" => {
            chat.reset();
            print_message(chat, 0);
            print_examples(chat);
        }
        _ if command.starts_with('/') => println!("Unknown command {command}; try /help"),
        _ => {
            chat.set_input(line);
            send(chat).await;
        }
    }
    true
}

async fn send(chat: &mut ChatService) {
    println!("{}", chat.strings().chat.thinking);
    match chat.submit().await {
        Ok(SendOutcome::Replied { .. }) => {
            let last = chat.messages().len() - 1;
            print_message(chat, last);
        }
        Ok(SendOutcome::Failed) => println!("(type /retry to resend)"),
        Ok(SendOutcome::Discarded) => {}
        Err(AppError::RequestInFlight { .. }) => println!("{}", chat.strings().notices.busy),
        Err(e) => println!("{e}"),
    }
}

fn speak(chat: &mut ChatService, arg: &str) {
    let target = if arg.is_empty() {
        chat.session().last_assistant().map(|m| m.id.clone())
    } else {
        arg.parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| chat.messages().get(idx))
            .map(|m| m.id.clone())
    };
    let Some(message_id) = target else {
        println!("No such message; try /messages");
        return;
    };
    match chat.toggle_speech(&message_id) {
        Ok(SpeechTransition::Stopped) => println!("(stopped)"),
        Ok(_) => println!("({}...)", chat.strings().chat.speak),
        Err(AppError::TurnNotFound { .. }) => println!("Only replies can be read aloud"),
        Err(e) => println!("{e}"),
    }
}

fn print_header(chat: &ChatService) {
    let strings = chat.strings();
    println!(
        "{} [{}]\n{}",
        strings.chat.title,
        chat.language().as_str().to_uppercase(),
        strings.chat.subtitle
    );
}

fn print_examples(chat: &ChatService) {
    let examples = chat.visible_examples();
    if examples.is_empty() {
        return;
    }
    println!("{}", chat.strings().chat.examples_title);
    for (idx, example) in examples.iter().enumerate() {
        println!("  {}. {example}", idx + 1);
    }
}

fn print_message(chat: &ChatService, idx: usize) {
    let Some(message) = chat.messages().get(idx) else { return };
    let who = if message.is_user_authored { "you" } else { "🌾" };
    let failed = if message.delivery == krishimitra::models::Delivery::Failed {
        " (not sent)"
    } else {
        ""
    };
    println!("{}. {who}: {}{failed}", idx + 1, message.text);
}
