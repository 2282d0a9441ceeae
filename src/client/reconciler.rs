use crate::models::employee::Employee;
use log::warn;

/// The canonical, server-confirmed list of employees, in display order.
///
/// It only changes in response to a successful server call, through one of
/// the `on_*` methods.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmployeeCollection {
    employees: Vec<Employee>,
}

impl EmployeeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Employee] {
        &self.employees
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    pub fn on_list_loaded(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
    }

    /// Appends the server's record. An id already present is replaced in place.
    pub fn on_create_succeeded(&mut self, employee: Employee) {
        match self.employees.iter_mut().find(|e| e.id == employee.id) {
            Some(existing) => {
                warn!("Created employee {} was already listed", employee.id);
                *existing = employee;
            }
            None => self.employees.push(employee),
        }
    }

    /// Replaces the matching record where it stands, even though the server
    /// stores updated records last. Returns false if no record matched.
    pub fn on_update_succeeded(&mut self, employee: Employee) -> bool {
        match self.employees.iter_mut().find(|e| e.id == employee.id) {
            Some(existing) => {
                *existing = employee;
                true
            }
            None => {
                warn!("Updated employee {} is not listed", employee.id);
                false
            }
        }
    }

    pub fn on_delete_succeeded(&mut self, remaining: Vec<Employee>) {
        self.employees = remaining;
    }
}

impl<'a> IntoIterator for &'a EmployeeCollection {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}
