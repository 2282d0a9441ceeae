use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Seed records carry no id; one is generated for each on load.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedEmployee {
    full_name: String,
    #[serde(rename = "DOB", alias = "dob")]
    dob: String,
    role: String,
}

/// File-backed employee collection.
///
/// Every mutation rewrites the whole data file while holding the write lock,
/// and the in-memory list is only replaced once the write succeeded.
pub struct EmployeeStore {
    path: PathBuf,
    employees: RwLock<Vec<Employee>>,
}

impl EmployeeStore {
    pub async fn open(path: impl Into<PathBuf>, seed: Option<&Path>) -> Result<Self, AppError> {
        let path = path.into();
        let employees = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Vec<Employee>>(&bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => match seed {
                Some(seed) => load_seed(seed).await?,
                None => Vec::new(),
            },
            Err(err) => return Err(err.into()),
        };

        info!(
            "Loaded {} employees from {}",
            employees.len(),
            path.display()
        );

        Ok(EmployeeStore {
            path,
            employees: RwLock::new(employees),
        })
    }

    pub async fn list(&self) -> Vec<Employee> {
        self.employees.read().await.clone()
    }

    pub async fn create(&self, new_employee: NewEmployee) -> Result<Employee, AppError> {
        let mut employees = self.employees.write().await;

        let employee = Employee::from_new(Uuid::new_v4().to_string(), new_employee);
        let mut next = employees.clone();
        next.push(employee.clone());

        self.save(&next).await?;
        *employees = next;

        info!("Created employee {}", employee.id);
        Ok(employee)
    }

    /// Merges `updates` into the stored record and moves it to the end of the list.
    pub async fn update(&self, id: &str, updates: EmployeeUpdate) -> Result<Employee, AppError> {
        let mut employees = self.employees.write().await;

        let position = employees
            .iter()
            .position(|employee| employee.id == id)
            .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

        let mut next = employees.clone();
        let employee = next.remove(position).merge(updates);
        next.push(employee.clone());

        self.save(&next).await?;
        *employees = next;

        info!("Updated employee {}", employee.id);
        Ok(employee)
    }

    /// Removes the record and returns every remaining one.
    pub async fn remove(&self, id: &str) -> Result<Vec<Employee>, AppError> {
        let mut employees = self.employees.write().await;

        if !employees.iter().any(|employee| employee.id == id) {
            return Err(AppError::NotFound("Employee not found".to_string()));
        }

        let next: Vec<Employee> = employees
            .iter()
            .filter(|employee| employee.id != id)
            .cloned()
            .collect();

        self.save(&next).await?;
        *employees = next;

        info!("Deleted employee {}", id);
        Ok(employees.clone())
    }

    async fn save(&self, employees: &[Employee]) -> Result<(), AppError> {
        let bytes = to_pretty_json(employees)?;
        tokio::fs::write(&self.path, bytes).await.map_err(|err| {
            error!("Failed to write {}: {:?}", self.path.display(), err);
            AppError::from(err)
        })
    }
}

async fn load_seed(seed: &Path) -> Result<Vec<Employee>, AppError> {
    let bytes = tokio::fs::read(seed).await?;
    let seeds: Vec<SeedEmployee> = serde_json::from_slice(&bytes)?;
    info!("Seeding {} employees from {}", seeds.len(), seed.display());

    Ok(seeds
        .into_iter()
        .map(|seed| Employee {
            id: Uuid::new_v4().to_string(),
            full_name: seed.full_name,
            dob: seed.dob,
            role: seed.role,
        })
        .collect())
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, AppError> {
    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    value.serialize(&mut serializer)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn new_employee(name: &str) -> NewEmployee {
        NewEmployee {
            full_name: name.to_string(),
            dob: "01/01/2001".to_string(),
            role: "dev".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_file_without_seed_starts_empty() {
        let dir = tempdir().unwrap();
        let store = EmployeeStore::open(dir.path().join("employees.json"), None)
            .await
            .unwrap();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn seed_records_receive_fresh_ids() {
        let dir = tempdir().unwrap();
        let seed = dir.path().join("seed.json");
        std::fs::write(
            &seed,
            r#"[{"fullName": "Ann", "DOB": "1/2/1990", "role": "ops"},
                {"fullName": "Bob", "DOB": "3/4/1985", "role": "dev"}]"#,
        )
        .unwrap();

        let store = EmployeeStore::open(dir.path().join("employees.json"), Some(&seed))
            .await
            .unwrap();
        let employees = store.list().await;

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].full_name, "Ann");
        assert!(employees.iter().all(|e| e.id.len() == 36));
        assert_ne!(employees[0].id, employees[1].id);
    }

    #[tokio::test]
    async fn create_appends_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("employees.json");
        let store = EmployeeStore::open(&path, None).await.unwrap();

        let first = store.create(new_employee("Ann")).await.unwrap();
        let second = store.create(new_employee("Bob")).await.unwrap();

        let ids: Vec<String> = store.list().await.into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![first.id.clone(), second.id.clone()]);

        let reopened = EmployeeStore::open(&path, None).await.unwrap();
        assert_eq!(reopened.list().await, store.list().await);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n    {"));
        assert!(raw.contains("\"DOB\""));
    }

    #[tokio::test]
    async fn update_merges_and_moves_record_last() {
        let dir = tempdir().unwrap();
        let store = EmployeeStore::open(dir.path().join("employees.json"), None)
            .await
            .unwrap();
        let ann = store.create(new_employee("Ann")).await.unwrap();
        store.create(new_employee("Bob")).await.unwrap();

        let updated = store
            .update(
                &ann.id,
                EmployeeUpdate {
                    role: Some("lead".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, ann.id);
        assert_eq!(updated.full_name, "Ann");
        assert_eq!(updated.role, "lead");

        let employees = store.list().await;
        assert_eq!(employees[0].full_name, "Bob");
        assert_eq!(employees[1], updated);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let dir = tempdir().unwrap();
        let store = EmployeeStore::open(dir.path().join("employees.json"), None)
            .await
            .unwrap();
        let result = store
            .update("0b4f8a58-8c5c-4d8e-9a53-0d2b3f1c2e7a", EmployeeUpdate::default())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn remove_returns_remaining_records() {
        let dir = tempdir().unwrap();
        let store = EmployeeStore::open(dir.path().join("employees.json"), None)
            .await
            .unwrap();
        let ann = store.create(new_employee("Ann")).await.unwrap();
        let bob = store.create(new_employee("Bob")).await.unwrap();

        let remaining = store.remove(&ann.id).await.unwrap();
        assert_eq!(remaining, vec![bob]);
        assert!(matches!(
            store.remove(&ann.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn failed_save_leaves_memory_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("employees.json");
        let store = EmployeeStore::open(&path, None).await.unwrap();

        let result = store.create(new_employee("Ann")).await;
        assert!(matches!(result, Err(AppError::StorageError(_))));
        assert!(store.list().await.is_empty());
    }
}
