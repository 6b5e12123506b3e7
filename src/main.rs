use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::{prelude::*, EnvFilter};

use bizboard::core::RngStreams;
use bizboard::driver::{self, GameDriver, Request};
use bizboard::engine::builder::QUESTIONS_FILE;
use bizboard::quiz::SeriesStep;
use bizboard::{GameBuilder, GameRng, QuestionBank, QuizRequest, QuizSeries, SessionConfig};

/// Play a headless session with a scripted responder.
#[derive(Parser, Debug)]
#[command(name = "bizboard")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Session config file (TOML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with companies, decks and questions
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Number of turns to play
    #[arg(short, long, default_value = "20")]
    turns: usize,

    /// Seed override
    #[arg(short, long)]
    seed: Option<u64>,

    /// Question edition inside the question file
    #[arg(short, long)]
    edition: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config =
        SessionConfig::load(args.config.as_deref()).context("failed to load session config")?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let questions =
        QuestionBank::load_or_empty(&args.data_dir.join(QUESTIONS_FILE), args.edition.as_deref());
    let responder = AutoResponder::new(&config, questions);

    let engine = GameBuilder::from_data_dir(config, &args.data_dir)
        .build()
        .context("failed to assemble game")?;

    let (collaborators, requests) = driver::channel(16);
    let responder_task = tokio::spawn(responder.run(requests));

    let mut driver = GameDriver::new(engine, collaborators);
    let reports = driver.play_turns(args.turns).await?;
    info!(turns = reports.len(), "session finished");

    let snapshot = driver.engine().snapshot();
    drop(driver);
    responder_task.await?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .init();
}

/// Answers every request immediately: accepts offers, guesses quiz
/// answers, picks the first allowed field.
struct AutoResponder {
    dice_rng: GameRng,
    quiz_rng: GameRng,
    dice: (u8, u8),
    questions: QuestionBank,
}

impl AutoResponder {
    fn new(config: &SessionConfig, questions: QuestionBank) -> Self {
        let streams = RngStreams::from_seed(config.seed);
        Self {
            dice_rng: streams.dice,
            quiz_rng: streams.quiz,
            dice: (config.dice.count, config.dice.sides),
            questions,
        }
    }

    /// Play one quiz series with random guesses.
    fn run_quiz(&mut self, request: &QuizRequest) -> bool {
        let mut series = QuizSeries::new(request.level, request.spec);
        loop {
            match series.next(&self.questions, &mut self.quiz_rng) {
                SeriesStep::Ask(question) => {
                    let guess = self.quiz_rng.gen_range_usize(0..question.options.len().max(1));
                    match series.answer(guess) {
                        Ok(correct) => debug!(question = question.id, guess, correct, "answered"),
                        Err(err) => {
                            warn!(
                                question = question.id,
                                error = %err,
                                "answer refused, failing quiz",
                            );
                            return false;
                        }
                    }
                }
                SeriesStep::Finished { passed, correct } => {
                    info!(player = %request.player, correct, passed, "quiz finished");
                    return passed;
                }
            }
        }
    }

    async fn run(mut self, mut requests: mpsc::Receiver<Request>) {
        while let Some(request) = requests.recv().await {
            match request {
                Request::RollDice { reply, .. } => {
                    reply.resume(self.dice_rng.roll_dice(self.dice.0, self.dice.1));
                }
                Request::AnimateMove { plan, reply } => {
                    reply.resume(plan.to);
                }
                Request::OfferPurchase { reply, .. } => {
                    reply.resume(true);
                }
                Request::RunQuiz { request, reply } => {
                    reply.resume(self.run_quiz(&request));
                }
                Request::ShowCard { card, reply, .. } => {
                    info!(card = %card.id, text = %card.text, "card shown");
                    reply.resume(());
                }
                Request::SelectField { allowed, reply, .. } => {
                    reply.resume(allowed.first().copied());
                }
                Request::Notify(signal) => {
                    debug!(?signal, "signal");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizboard::core::QuizSpec;
    use bizboard::quiz::Question;
    use bizboard::{CompanyLevel, FieldIndex, PlayerId};

    fn request(spec: QuizSpec) -> QuizRequest {
        QuizRequest {
            player: PlayerId::new(1),
            field: FieldIndex::new(1),
            level: CompanyLevel::Founded,
            spec,
        }
    }

    fn responder(questions: QuestionBank) -> AutoResponder {
        AutoResponder::new(&SessionConfig::default(), questions)
    }

    #[test]
    fn test_single_option_questions_always_pass() {
        let only = |id| Question {
            id,
            text: format!("Q{id}"),
            options: vec!["yes".into()],
            correct_index: 0,
        };
        let bank = QuestionBank::new(vec![only(1), only(2)], vec![], vec![]);
        let mut auto = responder(bank);
        assert!(auto.run_quiz(&request(QuizSpec::new(2, 2))));
    }

    #[test]
    fn test_empty_bank_fails_quiz() {
        let mut auto = responder(QuestionBank::empty());
        assert!(!auto.run_quiz(&request(QuizSpec::new(1, 1))));
    }
}
