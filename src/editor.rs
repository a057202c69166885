//! Answer-list editor state, kept free of DOM types so it can be unit
//! tested on the host target.

/// One editable answer entry. The id doubles as the form-field suffix,
/// so it must stay stable for the row's whole lifetime.
#[derive(Clone, PartialEq, Debug)]
pub struct AnswerRow {
    pub id: usize,
    pub value: String,
}

impl AnswerRow {
    /// Form-field name the backend collects (`pos_ans0`, `pos_ans1`, ...).
    pub fn field_name(&self) -> String {
        format!("pos_ans{}", self.id)
    }
}

/// Ordered list of answer rows plus the id counter.
///
/// Insertion order is visual order. Ids come from a strictly increasing
/// counter that is never reset or decremented, so a removed row's id is
/// never handed out again.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AnswerList {
    next_id: usize,
    rows: Vec<AnswerRow>,
}

impl AnswerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row pre-filled with `value` and return its id.
    pub fn add(&mut self, value: impl Into<String>) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(AnswerRow {
            id,
            value: value.into(),
        });
        id
    }

    /// Remove the row with the given id, if present. Other rows keep
    /// their ids and relative order.
    pub fn remove(&mut self, id: usize) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() < before
    }

    /// Mirror an input edit back into the addressed row.
    pub fn set_value(&mut self, id: usize, value: String) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.value = value;
        }
    }

    /// Append one row per user name, in the given order. No deduplication
    /// against existing rows; repeated calls keep appending.
    pub fn prepopulate(&mut self, names: &[String]) {
        for name in names {
            self.add(name.clone());
        }
    }

    pub fn rows(&self) -> &[AnswerRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Question type mirrored from the form's "multiple choice" checkbox.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum QuestionType {
    #[default]
    Single,
    Multi,
}

impl QuestionType {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Multi
        } else {
            Self::Single
        }
    }

    pub fn is_multi(self) -> bool {
        matches!(self, Self::Multi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(list: &AnswerList) -> Vec<(String, String)> {
        list.rows()
            .iter()
            .map(|row| (row.field_name(), row.value.clone()))
            .collect()
    }

    #[test]
    fn fresh_list_is_empty_and_type_defaults_to_single() {
        let list = AnswerList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(QuestionType::default(), QuestionType::Single);
    }

    #[test]
    fn add_assigns_strictly_increasing_ids() {
        let mut list = AnswerList::new();
        let ids: Vec<usize> = (0..5).map(|_| list.add("")).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(list.len(), 5);
        for window in list.rows().windows(2) {
            assert!(window[0].id < window[1].id);
        }
    }

    #[test]
    fn two_adds_yield_pos_ans0_and_pos_ans1() {
        let mut list = AnswerList::new();
        list.add("");
        list.add("");
        assert_eq!(
            values(&list),
            vec![
                ("pos_ans0".to_string(), String::new()),
                ("pos_ans1".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn remove_middle_row_keeps_other_ids_and_order() {
        let mut list = AnswerList::new();
        list.add("A");
        let b = list.add("B");
        list.add("C");

        assert!(list.remove(b));
        assert_eq!(
            values(&list),
            vec![
                ("pos_ans0".to_string(), "A".to_string()),
                ("pos_ans2".to_string(), "C".to_string()),
            ]
        );

        // The freed id is never reused.
        assert_eq!(list.add(""), 3);
    }

    #[test]
    fn remove_of_absent_id_is_a_no_op() {
        let mut list = AnswerList::new();
        list.add("A");
        assert!(!list.remove(42));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn counter_survives_removing_every_row() {
        let mut list = AnswerList::new();
        let a = list.add("");
        let b = list.add("");
        list.remove(a);
        list.remove(b);
        assert!(list.is_empty());
        assert_eq!(list.add(""), 2);
    }

    #[test]
    fn prepopulate_appends_in_order() {
        let users = vec!["alice".to_string(), "bob".to_string()];

        let mut list = AnswerList::new();
        list.prepopulate(&users);
        assert_eq!(
            values(&list),
            vec![
                ("pos_ans0".to_string(), "alice".to_string()),
                ("pos_ans1".to_string(), "bob".to_string()),
            ]
        );
    }

    #[test]
    fn prepopulate_adds_to_existing_rows_without_dedup() {
        let users = vec!["alice".to_string(), "bob".to_string()];

        let mut list = AnswerList::new();
        list.add("alice");
        list.prepopulate(&users);
        list.prepopulate(&users);
        assert_eq!(list.len(), 5);
        let texts: Vec<&str> = list.rows().iter().map(|r| r.value.as_str()).collect();
        assert_eq!(texts, vec!["alice", "alice", "bob", "alice", "bob"]);
    }

    #[test]
    fn set_value_touches_only_the_addressed_row() {
        let mut list = AnswerList::new();
        let a = list.add("A");
        list.add("B");
        list.set_value(a, "edited".to_string());
        let texts: Vec<&str> = list.rows().iter().map(|r| r.value.as_str()).collect();
        assert_eq!(texts, vec!["edited", "B"]);

        // Unknown id: nothing changes.
        list.set_value(99, "ghost".to_string());
        let texts: Vec<&str> = list.rows().iter().map(|r| r.value.as_str()).collect();
        assert_eq!(texts, vec!["edited", "B"]);
    }

    #[test]
    fn checkbox_state_maps_onto_question_type() {
        assert_eq!(QuestionType::from_checked(true), QuestionType::Multi);
        assert_eq!(QuestionType::from_checked(false), QuestionType::Single);
        assert!(QuestionType::Multi.is_multi());
        assert!(!QuestionType::Single.is_multi());

        // Re-applying the same checkbox state is a no-op on the value.
        let t = QuestionType::from_checked(true);
        assert_eq!(QuestionType::from_checked(true), t);
    }
}
