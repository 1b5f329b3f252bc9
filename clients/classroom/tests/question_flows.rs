//! Question page flows, including answer exclusivity

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use classroom::gateway::questions::QuestionGateway;
use classroom::models::{Answer, Question, QuestionDraft};
use classroom::pages::QuestionPage;
use common::error::ApiResult;
use flow::form::FormState;

fn question(id: i64, prompt: &str, position: u32) -> Question {
    Question {
        id,
        quiz_id: 7,
        prompt: prompt.to_string(),
        answers: vec![
            Answer {
                text: "Benar".to_string(),
                is_correct: true,
            },
            Answer {
                text: "Salah".to_string(),
                is_correct: false,
            },
        ],
        position,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[derive(Default)]
struct Inner {
    questions: Mutex<Vec<Question>>,
    created: Mutex<Vec<QuestionDraft>>,
}

#[derive(Clone, Default)]
struct FakeQuestions {
    inner: Arc<Inner>,
}

impl QuestionGateway for FakeQuestions {
    async fn list(&self, _quiz_id: i64) -> ApiResult<Vec<Question>> {
        Ok(self.inner.questions.lock().unwrap().clone())
    }

    async fn create(&self, _quiz_id: i64, draft: &QuestionDraft) -> ApiResult<Question> {
        self.inner.created.lock().unwrap().push(draft.clone());
        let mut saved = question(42, &draft.prompt, 1);
        saved.answers = draft.answers.clone();
        Ok(saved)
    }

    async fn update(&self, id: i64, draft: &QuestionDraft) -> ApiResult<Question> {
        let mut saved = question(id, &draft.prompt, 1);
        saved.answers = draft.answers.clone();
        Ok(saved)
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.inner.questions.lock().unwrap().retain(|q| q.id != id);
        Ok(())
    }
}

fn page(fake: &FakeQuestions) -> QuestionPage<FakeQuestions> {
    QuestionPage::new(fake.clone(), 7, Duration::from_millis(5000))
}

#[tokio::test]
async fn test_marking_an_answer_clears_the_previous_one() {
    let fake = FakeQuestions::default();
    let mut page = page(&fake);

    page.open_create();
    page.form.update(|draft| {
        draft.prompt = "Ibu kota Indonesia?".to_string();
        draft.answers[0].text = "Jakarta".to_string();
        draft.answers[1].text = "Bandung".to_string();
    });
    page.add_answer();
    page.form.update(|draft| draft.answers[2].text = "Surabaya".to_string());

    page.mark_correct(1);
    page.mark_correct(0);

    page.submit().await;

    assert!(matches!(page.form.state(), FormState::Closed));
    let created = fake.inner.created.lock().unwrap();
    let sent = &created[0];
    let correct: Vec<usize> = sent
        .answers
        .iter()
        .enumerate()
        .filter(|(_, a)| a.is_correct)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(correct, vec![0], "exactly the last marked answer is correct");
}

#[tokio::test]
async fn test_no_correct_answer_is_rejected_locally() {
    let fake = FakeQuestions::default();
    let mut page = page(&fake);

    page.open_create();
    page.form.update(|draft| {
        draft.prompt = "2 + 2?".to_string();
        draft.answers[0].text = "3".to_string();
        draft.answers[1].text = "4".to_string();
    });
    page.submit().await;

    assert!(fake.inner.created.lock().unwrap().is_empty());
    match page.form.state() {
        FormState::Open { error, .. } => {
            assert_eq!(error.as_deref(), Some("Tandai tepat satu jawaban benar"))
        }
        _ => panic!("modal must stay open"),
    }
}

#[test]
fn test_removing_an_answer_drops_below_minimum() {
    tokio_test::block_on(async {
        let fake = FakeQuestions::default();
        let mut page = page(&fake);

        page.open_create();
        page.form.update(|draft| {
            draft.prompt = "Benar atau salah?".to_string();
            draft.answers[0].text = "Benar".to_string();
            draft.answers[1].text = "Salah".to_string();
        });
        page.mark_correct(0);
        page.remove_answer(1);
        page.submit().await;

        assert!(fake.inner.created.lock().unwrap().is_empty());
        match page.form.state() {
            FormState::Open { error, .. } => {
                assert_eq!(error.as_deref(), Some("Minimal 2 pilihan jawaban"))
            }
            _ => panic!("modal must stay open"),
        }
    });
}
