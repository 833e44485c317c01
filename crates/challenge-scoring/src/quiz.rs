use challenge_types::{QuizAnalysis, QuizAnswerSet, QuizDetail, QuizQuestion};

/// `round(correct / total × max)`. An empty quiz scores 0.
pub fn quiz_score(correct: usize, total: usize, max: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * max as f64).round() as u32
}

/// Per-question breakdown of the user's answers, in question order.
pub fn analyze_quiz(questions: &[QuizQuestion], answers: &QuizAnswerSet) -> QuizAnalysis {
    let details: Vec<QuizDetail> = questions
        .iter()
        .map(|q| {
            let chosen = answers.get(&q.id);
            QuizDetail {
                question: q.prompt.clone(),
                user_answer: chosen.and_then(|i| q.options.get(i)).cloned(),
                correct_answer: q.options.get(q.correct_option).cloned().unwrap_or_default(),
                is_correct: chosen.is_some_and(|i| q.is_correct(i)),
            }
        })
        .collect();

    QuizAnalysis {
        correct_answers: details.iter().filter(|d| d.is_correct).count(),
        total_questions: questions.len(),
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_of_three_rounds_to_thirteen() {
        assert_eq!(quiz_score(2, 3, 20), 13);
    }

    #[test]
    fn quiz_score_endpoints() {
        assert_eq!(quiz_score(0, 3, 20), 0);
        assert_eq!(quiz_score(3, 3, 20), 20);
        assert_eq!(quiz_score(1, 3, 20), 7);
        assert_eq!(quiz_score(0, 0, 20), 0);
    }

    #[test]
    fn breakdown_reports_option_text() {
        let questions = vec![QuizQuestion {
            id: "q1".into(),
            prompt: "Which parameter sets tooth size?".into(),
            options: vec!["Pressure angle".into(), "Module".into()],
            correct_option: 1,
        }];
        let answers: QuizAnswerSet = [("q1", 0usize)].into_iter().collect();
        let analysis = analyze_quiz(&questions, &answers);
        assert_eq!(analysis.correct_answers, 0);
        assert_eq!(analysis.total_questions, 1);
        let detail = &analysis.details[0];
        assert_eq!(detail.user_answer.as_deref(), Some("Pressure angle"));
        assert_eq!(detail.correct_answer, "Module");
        assert!(!detail.is_correct);
    }
}
