//! Line-oriented menu over the employee record store.
//!
//! Input and output are injected so the loop can be driven from a script in
//! tests and from stdin/stdout in the `menu` binary.

use std::io::{self, BufRead, Write};

use service::employees::{model::parse_salary, Employee, EmployeeRepository};
use service::errors::ServiceError;
use tracing::debug;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Exit,
}

impl MenuChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Search),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// `ID: E1, Name: A, Dept: Eng, Salary: $50000.00`
pub fn format_employee(e: &Employee) -> String {
    format!("ID: {}, Name: {}, Dept: {}, Salary: ${:.2}", e.id, e.name, e.department, e.salary)
}

pub struct Menu<'a, R, W> {
    repo: &'a dyn EmployeeRepository,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(repo: &'a dyn EmployeeRepository, input: R, output: W) -> Self {
        Self { repo, input, output }
    }

    /// Show the menu until the user exits or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n=== Employee Management System ===")?;
            writeln!(self.output, "1. Add New Employee")?;
            writeln!(self.output, "2. View All Employees")?;
            writeln!(self.output, "3. Search Employee by ID")?;
            writeln!(self.output, "4. Exit")?;

            let Some(choice) = self.prompt("Please choose an option (1-4): ")? else {
                debug!("input closed at main menu");
                writeln!(self.output)?;
                break;
            };

            let keep_going = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.add_employee().await?,
                Some(MenuChoice::List) => {
                    self.view_all_employees().await?;
                    true
                }
                Some(MenuChoice::Search) => self.search_employee().await?,
                Some(MenuChoice::Exit) => false,
                None => {
                    writeln!(self.output, "Invalid choice. Please select a number between 1 and 4.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        writeln!(self.output, "Exiting the system. Goodbye!")?;
        self.output.flush()
    }

    /// Returns `false` when input ended mid-way.
    async fn add_employee(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Add New Employee ---")?;
        let Some(id) = self.prompt("Enter Employee ID: ")? else { return Ok(false) };
        let Some(name) = self.prompt("Enter Employee Name: ")? else { return Ok(false) };
        let Some(department) = self.prompt("Enter Department: ")? else { return Ok(false) };
        let Some(raw_salary) = self.prompt("Enter Salary: ")? else { return Ok(false) };

        let Some(salary) = parse_salary(&raw_salary) else {
            writeln!(self.output, "Invalid salary amount. Please enter a number.")?;
            return Ok(true);
        };

        match self.repo.add(Employee::new(id, name, department, salary)).await {
            Ok(()) => writeln!(self.output, "Employee added successfully!")?,
            Err(ServiceError::DuplicateId) => {
                writeln!(self.output, "Error: An employee with this ID already exists.")?;
                writeln!(self.output, "Failed to add employee.")?;
            }
            Err(e) => {
                writeln!(self.output, "Error: {e}")?;
                writeln!(self.output, "Failed to add employee.")?;
            }
        }
        Ok(true)
    }

    async fn view_all_employees(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- All Employees ---")?;
        let employees = self.repo.list_all().await;
        if employees.is_empty() {
            writeln!(self.output, "No employees found.")?;
        }
        for e in &employees {
            writeln!(self.output, "{}", format_employee(e))?;
        }
        Ok(())
    }

    async fn search_employee(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Search Employee ---")?;
        let Some(id) = self.prompt("Enter Employee ID to search: ")? else { return Ok(false) };
        match self.repo.find_by_id(&id).await {
            Some(e) => writeln!(self.output, "Employee Found: {}", format_employee(&e))?,
            None => writeln!(self.output, "Employee not found.")?,
        }
        Ok(true)
    }

    /// Print `label`, read one line and trim it. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configs::JsonLayout;
    use service::file::employee_store::EmployeeStore;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn tmp_path() -> PathBuf {
        std::env::temp_dir().join(format!("menu_{}.json", uuid::Uuid::new_v4()))
    }

    async fn run_script(store: &Arc<EmployeeStore>, script: &str) -> anyhow::Result<String> {
        let mut out = Vec::new();
        Menu::new(store.as_ref(), Cursor::new(script.as_bytes()), &mut out).run().await?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn choices_parse() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn employee_line_has_two_decimals() {
        let e = Employee::new("E1", "A", "Eng", 50000.0);
        assert_eq!(format_employee(&e), "ID: E1, Name: A, Dept: Eng, Salary: $50000.00");
    }

    #[tokio::test]
    async fn add_list_search_exit() -> anyhow::Result<()> {
        let tmp = tmp_path();
        let store = EmployeeStore::new(&tmp, JsonLayout::Compact).await?;

        let out = run_script(&store, "1\n E1 \nAda\nEng\n50000\n2\n3\nE1\n3\nE2\n4\n").await?;
        assert!(out.contains("Employee added successfully!"));
        assert!(out.contains("--- All Employees ---\nID: E1, Name: Ada, Dept: Eng, Salary: $50000.00"));
        assert!(out.contains("Employee Found: ID: E1, Name: Ada, Dept: Eng, Salary: $50000.00"));
        assert!(out.contains("Employee not found."));
        assert!(out.trim_end().ends_with("Exiting the system. Goodbye!"));

        // interactive path writes compact JSON
        let text = tokio::fs::read_to_string(&tmp).await?;
        assert_eq!(text, r#"[{"id":"E1","name":"Ada","department":"Eng","salary":50000.0}]"#);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn invalid_salary_leaves_store_untouched() -> anyhow::Result<()> {
        let tmp = tmp_path();
        let store = EmployeeStore::new(&tmp, JsonLayout::Compact).await?;

        let out = run_script(&store, "1\nE1\nAda\nEng\nlots\n2\n4\n").await?;
        assert!(out.contains("Invalid salary amount. Please enter a number."));
        assert!(out.contains("No employees found."));
        assert!(store.list_all().await.is_empty());
        assert_eq!(tokio::fs::read_to_string(&tmp).await?, "[]");

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_id_is_reported() -> anyhow::Result<()> {
        let tmp = tmp_path();
        let store = EmployeeStore::new(&tmp, JsonLayout::Compact).await?;

        let out = run_script(&store, "1\nE1\nAda\nEng\n1\n1\nE1\nBob\nOps\n2\n4\n").await?;
        assert!(out.contains("Error: An employee with this ID already exists.\nFailed to add employee."));
        let all = store.list_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Ada");

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn invalid_choice_returns_to_menu() -> anyhow::Result<()> {
        let tmp = tmp_path();
        let store = EmployeeStore::new(&tmp, JsonLayout::Compact).await?;

        let out = run_script(&store, "9\n4\n").await?;
        assert!(out.contains("Invalid choice. Please select a number between 1 and 4."));
        assert_eq!(out.matches("=== Employee Management System ===").count(), 2);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn end_of_input_exits_cleanly() -> anyhow::Result<()> {
        let tmp = tmp_path();
        let store = EmployeeStore::new(&tmp, JsonLayout::Compact).await?;

        // closes in the middle of an add
        let out = run_script(&store, "1\nE1\nAda\n").await?;
        assert!(out.trim_end().ends_with("Exiting the system. Goodbye!"));
        assert!(store.list_all().await.is_empty());

        let out = run_script(&store, "").await?;
        assert!(out.contains("Exiting the system. Goodbye!"));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
