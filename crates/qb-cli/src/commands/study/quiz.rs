use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use qb_core::answer::first_paragraph;
use qb_core::entities::Question;
use qb_query::filter::query_questions;
use qb_query::study::QuizSession;
use tracing::debug;

use crate::cli::GlobalFlags;
use crate::commands::question::list::{filter_from, sort_from};
use crate::commands::shared::limit::{as_len, effective_limit};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub category: Option<String>,
    pub mastery: String,
    pub difficulty: Option<u8>,
    pub limit: Option<u32>,
    pub record: bool,
}

pub async fn run(params: &Params, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let deck = deck(params, ctx, flags, Utc::now())?;
    debug!(cards = deck.len(), "quiz deck selected");

    let mut session = QuizSession::new(deck);
    {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut prompts = std::io::stderr();
        run_quiz(
            &mut session,
            ctx.provider.questions(),
            ctx.config.study.reveal_first_paragraph_only,
            &mut input,
            &mut prompts,
        )?;
    }

    if params.record {
        record_known(&session, ctx).await?;
    }
    output(&session.score(), flags.format)
}

/// Question ids for the quiz, in the configured list order.
fn deck(
    params: &Params,
    ctx: &AppContext,
    flags: &GlobalFlags,
    now: DateTime<Utc>,
) -> anyhow::Result<Vec<String>> {
    let filter = filter_from(
        params.category.as_deref(),
        params.difficulty,
        None,
        None,
        Some(params.mastery.as_str()),
    );
    let sort = sort_from(None, None, ctx)?;
    let limit = effective_limit(params.limit, flags.limit, ctx.config.general.default_limit);
    Ok(query_questions(ctx.provider.questions(), &filter, sort, now)
        .into_iter()
        .take(as_len(limit))
        .map(|q| q.id.clone())
        .collect())
}

/// Mark every question answered as known as mastered.
async fn record_known(session: &QuizSession, ctx: &mut AppContext) -> anyhow::Result<()> {
    let known = session
        .results()
        .iter()
        .filter(|(_, known)| *known)
        .map(|(id, _)| id.clone())
        .collect::<Vec<_>>();
    for id in known {
        if !ctx.provider.question(&id)?.mastered {
            ctx.provider.toggle_mastered(&id).await?;
        }
    }
    Ok(())
}

/// Drive a quiz over line-oriented input. Stops early on `q` or end of input.
pub fn run_quiz<R: BufRead, W: Write>(
    session: &mut QuizSession,
    questions: &[Question],
    first_paragraph_only: bool,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let total = session.len();
    while let Some(id) = session.current().map(str::to_string) {
        let Some(question) = questions.iter().find(|q| q.id == id) else {
            session.answer(false);
            continue;
        };

        writeln!(out, "\n[{}/{total}] {}", session.position() + 1, question.title)?;
        writeln!(out, "{}", question.question)?;
        write!(out, "press enter to reveal the answer (q to stop) ")?;
        out.flush()?;
        match read_line(input)? {
            Some(line) if !is_quit(&line) => {}
            _ => return Ok(()),
        }

        session.reveal();
        let answer = if first_paragraph_only {
            first_paragraph(&question.answer)
        } else {
            question.answer.as_str()
        };
        writeln!(out, "\n{answer}\n")?;

        loop {
            write!(out, "did you know it? [y/n/q] ")?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => {
                    session.answer(true);
                    break;
                }
                "n" | "no" => {
                    session.answer(false);
                    break;
                }
                "q" | "quit" => return Ok(()),
                _ => writeln!(out, "answer y, n, or q")?,
            }
        }
    }

    let score = session.score();
    writeln!(
        out,
        "\n{} of {} known ({}%)",
        score.correct, score.answered, score.percentage
    )?;
    Ok(())
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "q" | "quit")
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
