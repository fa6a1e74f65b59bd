use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A single question as stored on the quiz and snapshotted onto each attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub prompt: String,
    /// Topic label used to group results in the attempt analysis
    pub topic: String,
    pub options: Vec<QuestionOption>,
    /// Key of the correct option; never exposed through the API
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub key: String,
    pub text: String,
}

/// One answer as submitted by the student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    pub question_id: Uuid,
    pub selected_option: String,
}

/// A submitted answer after grading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkedAnswer {
    pub question_id: Uuid,
    pub selected_option: Option<String>,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub marked: Vec<MarkedAnswer>,
    pub correct_count: u32,
    pub total_questions: u32,
    /// Rounded percentage of correct answers, 0..=100
    pub score: i16,
}

/// Per-topic breakdown of a graded attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// A topic counts as a strength at or above this share of correct answers
const STRENGTH_THRESHOLD: f64 = 0.75;
/// A topic counts as a weakness below this share of correct answers
const WEAKNESS_THRESHOLD: f64 = 0.5;

/// Grades submitted answers against the attempt's question snapshot.
///
/// Every question in the snapshot is marked: an unanswered question counts
/// as wrong, and answers referencing unknown question ids are ignored. The
/// score is the rounded percentage of correct answers.
pub fn score_attempt(questions: &[Question], answers: &[SubmittedAnswer]) -> ScoreSummary {
    let selected: BTreeMap<Uuid, &str> = answers
        .iter()
        .map(|a| (a.question_id, a.selected_option.as_str()))
        .collect();

    let marked: Vec<MarkedAnswer> = questions
        .iter()
        .map(|question| {
            let selected_option = selected.get(&question.id).map(|s| (*s).to_string());
            let correct = selected_option.as_deref() == Some(question.correct_answer.as_str());

            MarkedAnswer {
                question_id: question.id,
                selected_option,
                correct,
            }
        })
        .collect();

    let total_questions = marked.len() as u32;
    let correct_count = marked.iter().filter(|m| m.correct).count() as u32;

    let score = if total_questions == 0 {
        0
    } else {
        ((f64::from(correct_count) / f64::from(total_questions)) * 100.0).round() as i16
    };

    ScoreSummary {
        marked,
        correct_count,
        total_questions,
        score,
    }
}

/// Derives the per-topic analysis stored alongside the score.
///
/// Topics are aggregated from the question snapshot, so the output is fully
/// determined by the stored questions and the graded answers. Topic lists
/// are sorted alphabetically.
pub fn analyze_attempt(questions: &[Question], summary: &ScoreSummary) -> AttemptAnalysis {
    // (correct, total) per topic; BTreeMap keeps the output ordering stable
    let mut topics: BTreeMap<&str, (u32, u32)> = BTreeMap::new();

    for (question, mark) in questions.iter().zip(summary.marked.iter()) {
        let entry = topics.entry(question.topic.as_str()).or_insert((0, 0));
        entry.1 += 1;
        if mark.correct {
            entry.0 += 1;
        }
    }

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut recommendations = Vec::new();

    for (topic, (correct, total)) in &topics {
        let accuracy = f64::from(*correct) / f64::from(*total);

        if accuracy >= STRENGTH_THRESHOLD {
            strengths.push((*topic).to_string());
        } else if accuracy < WEAKNESS_THRESHOLD {
            weaknesses.push((*topic).to_string());
            recommendations.push(format!(
                "Review {topic}: {correct} of {total} answered correctly"
            ));
        }
    }

    if weaknesses.is_empty() && summary.total_questions > 0 {
        recommendations.push("Keep up the consistent results across all topics".to_string());
    }

    AttemptAnalysis {
        strengths,
        weaknesses,
        recommendations,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn question(topic: &str, correct: &str) -> Question {
        Question {
            id: Uuid::new_v4(),
            prompt: format!("What about {topic}?"),
            topic: topic.to_string(),
            options: vec![
                QuestionOption {
                    key: "a".to_string(),
                    text: "First".to_string(),
                },
                QuestionOption {
                    key: "b".to_string(),
                    text: "Second".to_string(),
                },
            ],
            correct_answer: correct.to_string(),
        }
    }

    fn answer(q: &Question, option: &str) -> SubmittedAnswer {
        SubmittedAnswer {
            question_id: q.id,
            selected_option: option.to_string(),
        }
    }

    #[test]
    fn test_single_correct_answer_scores_full() {
        let questions = vec![question("algebra", "b")];
        let answers = vec![answer(&questions[0], "b")];

        let summary = score_attempt(&questions, &answers);
        assert_eq!(summary.correct_count, 1);
        assert_eq!(summary.total_questions, 1);
        assert_eq!(summary.score, 100);
    }

    #[test]
    fn test_unanswered_questions_count_as_wrong() {
        let questions = vec![question("algebra", "a"), question("geometry", "b")];
        let answers = vec![answer(&questions[0], "a")];

        let summary = score_attempt(&questions, &answers);
        assert_eq!(summary.correct_count, 1);
        assert_eq!(summary.score, 50);
        assert_eq!(summary.marked[1].selected_option, None);
        assert!(!summary.marked[1].correct);
    }

    #[test]
    fn test_unknown_question_ids_are_ignored() {
        let questions = vec![question("algebra", "a")];
        let answers = vec![SubmittedAnswer {
            question_id: Uuid::new_v4(),
            selected_option: "a".to_string(),
        }];

        let summary = score_attempt(&questions, &answers);
        assert_eq!(summary.correct_count, 0);
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn test_empty_snapshot_scores_zero() {
        let summary = score_attempt(&[], &[]);
        assert_eq!(summary.total_questions, 0);
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn test_score_rounds_to_nearest_percent() {
        let questions = vec![
            question("algebra", "a"),
            question("algebra", "a"),
            question("algebra", "a"),
        ];
        let answers = vec![answer(&questions[0], "a"), answer(&questions[1], "a")];

        // 2/3 rounds to 67
        let summary = score_attempt(&questions, &answers);
        assert_eq!(summary.score, 67);
    }

    #[test]
    fn test_analysis_splits_topics_deterministically() {
        let questions = vec![
            question("algebra", "a"),
            question("algebra", "a"),
            question("geometry", "b"),
            question("geometry", "b"),
        ];
        let answers = vec![
            answer(&questions[0], "a"),
            answer(&questions[1], "a"),
            answer(&questions[2], "a"),
            answer(&questions[3], "a"),
        ];

        let summary = score_attempt(&questions, &answers);
        let analysis = analyze_attempt(&questions, &summary);

        assert_eq!(analysis.strengths, vec!["algebra".to_string()]);
        assert_eq!(analysis.weaknesses, vec!["geometry".to_string()]);
        assert_eq!(
            analysis.recommendations,
            vec!["Review geometry: 0 of 2 answered correctly".to_string()]
        );
    }

    #[test]
    fn test_analysis_with_no_weaknesses_recommends_keeping_up() {
        let questions = vec![question("algebra", "a")];
        let answers = vec![answer(&questions[0], "a")];

        let summary = score_attempt(&questions, &answers);
        let analysis = analyze_attempt(&questions, &summary);

        assert!(analysis.weaknesses.is_empty());
        assert_eq!(analysis.recommendations.len(), 1);
    }
}
