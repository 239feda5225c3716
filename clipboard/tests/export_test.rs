use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use button_creator_clipboard::{ClipboardBackend, ClipboardError, ExportAction, Scheduler};
use button_creator_core::{generate_snippet, StyleConfig, StyleField, TriggerLabel};
use mockall::mock;

// ========================================
// テスト用ヘルパー
// ========================================

mock! {
    pub Backend {}

    impl ClipboardBackend for Backend {
        fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
    }
}

/// Collects deferred tasks so tests decide when time passes
#[derive(Default)]
struct ManualScheduler {
    pending: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    fn delays(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    fn run_all(&self) {
        let tasks: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((delay, task));
    }
}

fn label_recorder() -> (Rc<RefCell<Vec<TriggerLabel>>>, impl Fn(TriggerLabel) + Clone + 'static) {
    let labels = Rc::new(RefCell::new(Vec::new()));
    let sink = labels.clone();
    (labels, move |label| sink.borrow_mut().push(label))
}

const DELAY: Duration = Duration::from_millis(1000);

// ========================================
// trigger のテスト
// ========================================

#[test]
fn test_trigger_copies_current_snippet_once() {
    let mut config = StyleConfig::default();
    config.set_field(StyleField::TextColor, "#123456");
    let expected = generate_snippet(&config);

    let mut backend = MockBackend::new();
    backend
        .expect_write_text()
        .withf(move |text| text == expected)
        .times(1)
        .returning(|_| Ok(()));

    let action = ExportAction::new(backend, ManualScheduler::default(), DELAY);
    let (_labels, on_label) = label_recorder();

    assert!(action.trigger(&config, on_label).is_ok());
}

#[test]
fn test_trigger_shows_confirmation_then_reverts() {
    let mut backend = MockBackend::new();
    backend.expect_write_text().returning(|_| Ok(()));

    let action = ExportAction::new(backend, ManualScheduler::default(), DELAY);
    let (labels, on_label) = label_recorder();

    action.trigger(&StyleConfig::default(), on_label).unwrap();

    assert_eq!(*labels.borrow(), vec![TriggerLabel::Copied]);
    assert_eq!(labels.borrow()[0].text(), "Snippet copied!");
    assert_eq!(action.scheduler().delays(), vec![DELAY]);

    action.scheduler().run_all();

    assert_eq!(*labels.borrow(), vec![TriggerLabel::Copied, TriggerLabel::Idle]);
    assert_eq!(labels.borrow()[1].text(), "Create snippet");
}

#[test]
fn test_revert_ignores_intervening_config_changes() {
    let mut backend = MockBackend::new();
    backend.expect_write_text().returning(|_| Ok(()));

    let action = ExportAction::new(backend, ManualScheduler::default(), DELAY);
    let (labels, on_label) = label_recorder();

    let mut config = StyleConfig::default();
    action.trigger(&config, on_label).unwrap();
    config.set_field(StyleField::FontSize, "30");
    config.set_field(StyleField::BorderColor, "#000000");

    action.scheduler().run_all();

    assert_eq!(labels.borrow().last(), Some(&TriggerLabel::Idle));
}

#[test]
fn test_overlapping_triggers_all_revert_to_idle() {
    let mut backend = MockBackend::new();
    backend.expect_write_text().times(2).returning(|_| Ok(()));

    let action = ExportAction::new(backend, ManualScheduler::default(), DELAY);
    let (labels, on_label) = label_recorder();

    action.trigger(&StyleConfig::default(), on_label.clone()).unwrap();
    action.trigger(&StyleConfig::default(), on_label).unwrap();
    assert_eq!(action.scheduler().delays().len(), 2);

    action.scheduler().run_all();

    assert_eq!(
        *labels.borrow(),
        vec![
            TriggerLabel::Copied,
            TriggerLabel::Copied,
            TriggerLabel::Idle,
            TriggerLabel::Idle,
        ]
    );
}

#[test]
fn test_copy_failure_still_confirms() {
    let mut backend = MockBackend::new();
    backend
        .expect_write_text()
        .returning(|_| Err(ClipboardError::CopyRejected));

    let action = ExportAction::new(backend, ManualScheduler::default(), DELAY);
    let (labels, on_label) = label_recorder();

    let result = action.trigger(&StyleConfig::default(), on_label);

    assert_eq!(result, Err(ClipboardError::CopyRejected));
    assert_eq!(*labels.borrow(), vec![TriggerLabel::Copied]);

    action.scheduler().run_all();
    assert_eq!(labels.borrow().last(), Some(&TriggerLabel::Idle));
}
