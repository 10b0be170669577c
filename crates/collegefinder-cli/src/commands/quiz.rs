//! The `collegefinder quiz` command.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use collegefinder_core::quiz::{top_categories, Quiz, QuizState, MAX_TOP_CATEGORIES};

pub fn execute(answers: Option<Vec<usize>>) -> Result<()> {
    let quiz = collegefinder_core::builtin::builtin_quiz()?;

    let state = match answers {
        Some(answers) => answer_all(&quiz, &answers)?,
        None => {
            let stdin = io::stdin();
            answer_interactively(&quiz, stdin.lock())?
        }
    };

    print_results(&state)
}

fn answer_all(quiz: &Quiz, answers: &[usize]) -> Result<QuizState> {
    if answers.len() != quiz.len() {
        anyhow::bail!(
            "expected {} answers, got {}",
            quiz.len(),
            answers.len()
        );
    }

    let mut state = QuizState::new();
    for &option in answers {
        state = state.record_answer(quiz, option)?;
    }
    Ok(state)
}

fn answer_interactively(quiz: &Quiz, mut input: impl BufRead) -> Result<QuizState> {
    let mut state = QuizState::new();

    while let Some(current) = state.current_question() {
        let Some(question) = quiz.questions.get(current) else {
            anyhow::bail!("quiz has no question {}", current + 1);
        };
        println!(
            "\nQuestion {} of {} ({:.0}% complete)",
            current + 1,
            quiz.len(),
            state.progress(quiz) * 100.0
        );
        println!("{}", question.question);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option.text);
        }

        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("failed to read answer")?;
            if read == 0 {
                anyhow::bail!("quiz aborted: input ended before the last question");
            }

            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=question.options.len()).contains(&choice) => {
                    state = state.record_answer(quiz, choice - 1)?;
                    break;
                }
                _ => println!(
                    "Please enter a number between 1 and {}.",
                    question.options.len()
                ),
            }
        }
    }

    Ok(state)
}

fn print_results(state: &QuizState) -> Result<()> {
    let Some(scores) = state.scores() else {
        anyhow::bail!("quiz is not complete");
    };
    let ranked = top_categories(scores, MAX_TOP_CATEGORIES);

    let Some(best) = ranked.first() else {
        println!("No category scored. Try answering again.");
        return Ok(());
    };

    println!("\nYour career matches:");
    let mut table = Table::new();
    table.set_header(vec!["Category", "Score", "Match"]);
    for entry in &ranked {
        table.add_row(vec![
            Cell::new(entry.category.recommendation().title),
            Cell::new(entry.score),
            Cell::new(format!("{}%", entry.percentage)),
        ]);
    }
    println!("{table}");

    let rec = best.category.recommendation();
    println!("\nTop match: {}", rec.title);
    println!("{}", rec.description);
    println!("Suggested courses: {}", rec.courses.join(", "));
    println!("Career paths: {}", rec.careers.join(", "));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use collegefinder_core::quiz::Category;

    #[test]
    fn interactive_answers_are_one_based_and_reprompt() {
        let quiz = collegefinder_core::builtin::builtin_quiz().unwrap();
        let input = "1\n\nbanana\n9\n5\n1\n1\n1\n";
        let state = answer_interactively(&quiz, input.as_bytes()).unwrap();
        assert!(state.is_completed());
        assert_eq!(state.answers().get(&1), Some(&4));
        assert_eq!(state.answers().len(), quiz.len());
    }

    #[test]
    fn interactive_input_ending_early_fails() {
        let quiz = collegefinder_core::builtin::builtin_quiz().unwrap();
        assert!(answer_interactively(&quiz, "1\n2\n".as_bytes()).is_err());
    }

    #[test]
    fn answer_count_must_match_questions() {
        let quiz = collegefinder_core::builtin::builtin_quiz().unwrap();
        assert!(answer_all(&quiz, &[0, 0]).is_err());

        let state = answer_all(&quiz, &[0, 4, 4, 0, 4]).unwrap();
        let ranked = top_categories(state.scores().unwrap(), 3);
        assert_eq!(ranked[0].category, Category::Engineering);
    }
}
