//! Ordered task list

use super::model::Task;
use crate::error::{Error, Result};

/// Tasks in insertion order. Indices are 0-based here; the 1-based task
/// numbers users type are converted with [`TaskList::index_of`].
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Append a task unless an equal one is already present.
    ///
    /// Returns whether the task was added.
    pub fn add(&mut self, task: Task) -> bool {
        if self.tasks.contains(&task) {
            return false;
        }
        self.tasks.push(task);
        true
    }

    /// Convert a 1-based task number into a checked 0-based index
    pub fn index_of(&self, number: i64) -> Result<usize> {
        if number < 1 || number as u64 > self.tasks.len() as u64 {
            return Err(Error::IndexOutOfRange {
                number,
                size: self.tasks.len(),
            });
        }
        Ok((number - 1) as usize)
    }

    /// Remove and return the task at `index`
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        self.check(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Mark the task at `index` as completed
    pub fn mark(&mut self, index: usize) -> Result<&Task> {
        self.set_completed(index, true)
    }

    /// Mark the task at `index` as not completed
    pub fn unmark(&mut self, index: usize) -> Result<&Task> {
        self.set_completed(index, false)
    }

    fn set_completed(&mut self, index: usize, completed: bool) -> Result<&Task> {
        self.check(index)?;
        let task = &mut self.tasks[index];
        task.set_completed(completed);
        Ok(task)
    }

    fn check(&self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(Error::IndexOutOfRange {
                number: index as i64 + 1,
                size: self.tasks.len(),
            });
        }
        Ok(())
    }

    /// New list of the tasks whose description contains `keyword`
    pub fn find_keyword(&self, keyword: &str) -> TaskList {
        self.filtered(|task| task.contains_keyword(keyword))
    }

    /// New list of the tasks not yet completed
    pub fn incomplete_tasks(&self) -> TaskList {
        self.filtered(|task| !task.is_completed())
    }

    fn filtered(&self, keep: impl Fn(&Task) -> bool) -> TaskList {
        TaskList {
            tasks: self.tasks.iter().filter(|t| keep(t)).cloned().collect(),
        }
    }

    /// All records, one per line, each newline-terminated
    pub fn to_records(&self) -> String {
        let mut output = String::new();
        for task in &self.tasks {
            output.push_str(&task.to_record());
            output.push('\n');
        }
        output
    }

    /// Numbered display lines, `1. [T][ ] ...`, joined by newlines
    pub fn to_display(&self) -> String {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| format!("{}. {}", i + 1, task))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut list = TaskList::new();
        for task in iter {
            list.add(task);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        [
            Task::todo("read book").unwrap(),
            Task::deadline("return book", "2024-12-01").unwrap(),
            Task::event("project meeting", "2024-12-02 1400").unwrap(),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut tasks = sample();
        assert!(!tasks.add(Task::todo("read book").unwrap()));
        assert!(!tasks.add(Task::deadline("return book", "1/12/2024").unwrap()));
        assert_eq!(tasks.len(), 3);

        assert!(tasks.add(Task::event("read book", "tonight").unwrap()));
        assert_eq!(tasks.len(), 4);
    }

    #[test]
    fn test_delete_removes_task() -> Result<()> {
        let mut tasks = sample();
        let removed = tasks.delete(0)?;
        assert_eq!(removed.description(), "read book");
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t != &removed));
        Ok(())
    }

    #[test]
    fn test_index_checks_are_uniform() {
        let mut tasks = sample();
        assert!(matches!(
            tasks.delete(3),
            Err(Error::IndexOutOfRange { number: 4, size: 3 })
        ));
        assert!(matches!(
            tasks.mark(3),
            Err(Error::IndexOutOfRange { number: 4, .. })
        ));
        assert!(matches!(
            tasks.unmark(7),
            Err(Error::IndexOutOfRange { number: 8, .. })
        ));
    }

    #[test]
    fn test_index_of() {
        let tasks = sample();
        assert_eq!(tasks.index_of(1).unwrap(), 0);
        assert_eq!(tasks.index_of(3).unwrap(), 2);
        assert!(tasks.index_of(0).is_err());
        assert!(tasks.index_of(-1).is_err());
        assert!(tasks.index_of(4).is_err());
    }

    #[test]
    fn test_mark_unmark_idempotent() -> Result<()> {
        let mut tasks = sample();
        tasks.mark(1)?;
        tasks.mark(1)?;
        assert!(tasks.get(1).unwrap().is_completed());

        tasks.unmark(1)?;
        tasks.unmark(1)?;
        assert!(!tasks.get(1).unwrap().is_completed());
        Ok(())
    }

    #[test]
    fn test_find_keyword() {
        let tasks = sample();
        let found = tasks.find_keyword("book");
        assert_eq!(found.len(), 2);
        assert_eq!(found.get(0).unwrap().description(), "read book");
        assert_eq!(found.get(1).unwrap().description(), "return book");

        assert_eq!(tasks.find_keyword("").len(), 3);
        assert!(tasks.find_keyword("Book").is_empty());
        assert_eq!(tasks.len(), 3);
    }

    #[test]
    fn test_incomplete_tasks() -> Result<()> {
        let mut tasks = sample();
        tasks.mark(0)?;
        let pending = tasks.incomplete_tasks();
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|t| !t.is_completed()));
        Ok(())
    }

    #[test]
    fn test_to_display() {
        let tasks = sample();
        assert_eq!(
            tasks.to_display(),
            "1. [T][ ] read book\n\
             2. [D][ ] return book (by: 2024-12-01)\n\
             3. [E][ ] project meeting (at: 2024-12-02 1400)"
        );
        assert_eq!(TaskList::new().to_display(), "");
    }

    #[test]
    fn test_to_records() {
        let tasks = sample();
        assert_eq!(
            tasks.to_records(),
            "T | 0 | read book\n\
             D | 0 | return book | 2024-12-01\n\
             E | 0 | project meeting | 2024-12-02 1400\n"
        );
    }
}
