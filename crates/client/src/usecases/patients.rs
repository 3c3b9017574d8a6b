//! Patient use-cases.

use clinica_core::dto::patient::{CreatePatient, UpdatePatient};

use crate::adapter::HttpAdapter;
use crate::error::ClientError;
use crate::types::Patient;

/// Fetch one page of patients.
pub async fn list_patients(
    adapter: &impl HttpAdapter,
    limit: i64,
    offset: i64,
) -> Result<Vec<Patient>, ClientError> {
    adapter
        .get(&format!("/api/v1/patients?limit={limit}&offset={offset}"))
        .await
        .map_err(|e| ClientError::operation("No fue posible obtener los pacientes", e))
}

/// Fetch a single patient by id.
pub async fn get_patient(adapter: &impl HttpAdapter, id: i64) -> Result<Patient, ClientError> {
    adapter
        .get(&format!("/api/v1/patients/{id}"))
        .await
        .map_err(|e| ClientError::operation("No fue posible obtener el paciente", e))
}

/// Create a patient from a validated payload.
pub async fn create_patient(
    adapter: &impl HttpAdapter,
    patient: &CreatePatient,
) -> Result<Patient, ClientError> {
    adapter
        .post("/api/v1/patients", patient)
        .await
        .map_err(|e| ClientError::operation("No fue posible crear el paciente", e))
}

/// Apply a validated partial update to a patient.
pub async fn update_patient(
    adapter: &impl HttpAdapter,
    id: i64,
    update: &UpdatePatient,
) -> Result<Patient, ClientError> {
    adapter
        .put(&format!("/api/v1/patients/{id}"), update)
        .await
        .map_err(|e| ClientError::operation("No fue posible actualizar el paciente", e))
}

/// Soft-delete a patient.
pub async fn delete_patient(adapter: &impl HttpAdapter, id: i64) -> Result<(), ClientError> {
    adapter
        .delete(&format!("/api/v1/patients/{id}"))
        .await
        .map_err(|e| ClientError::operation("No fue posible eliminar el paciente", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde::de::DeserializeOwned;
    use serde::Serialize;

    /// Fake adapter returning a canned JSON value for every call and
    /// recording the last path it was asked for.
    struct FakeAdapter {
        response: serde_json::Value,
        last_path: std::sync::Mutex<String>,
    }

    impl FakeAdapter {
        fn new(response: serde_json::Value) -> Self {
            Self {
                response,
                last_path: std::sync::Mutex::new(String::new()),
            }
        }

        fn record(&self, path: &str) {
            *self.last_path.lock().unwrap() = path.to_string();
        }
    }

    #[async_trait]
    impl HttpAdapter for FakeAdapter {
        async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T, ClientError> {
            self.record(path);
            Ok(serde_json::from_value(self.response.clone()).unwrap())
        }

        async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
            &self,
            path: &str,
            _body: &B,
        ) -> Result<T, ClientError> {
            self.record(path);
            Ok(serde_json::from_value(self.response.clone()).unwrap())
        }

        async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
            &self,
            path: &str,
            _body: &B,
        ) -> Result<T, ClientError> {
            self.record(path);
            Ok(serde_json::from_value(self.response.clone()).unwrap())
        }

        async fn delete(&self, path: &str) -> Result<(), ClientError> {
            self.record(path);
            Err(ClientError::Api {
                status: 404,
                body: "{}".into(),
            })
        }
    }

    fn patient_json() -> serde_json::Value {
        serde_json::json!({
            "id": 1,
            "rut": "17539138-k",
            "nombres": "Carla",
            "apellidos": "Mena",
            "fecha_nacimiento": "1985-11-02",
            "email": null,
            "telefono": null,
            "direccion": null,
            "prevision": null,
            "doctor_id": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn get_patient_hits_expected_path() {
        let adapter = FakeAdapter::new(patient_json());
        let patient = get_patient(&adapter, 1).await.expect("use-case should succeed");
        assert_eq!(patient.rut, "17539138-k");
        assert_eq!(*adapter.last_path.lock().unwrap(), "/api/v1/patients/1");
    }

    #[tokio::test]
    async fn errors_are_wrapped_with_operation_context() {
        let adapter = FakeAdapter::new(serde_json::json!(null));
        let err = delete_patient(&adapter, 7).await.unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("No fue posible eliminar el paciente"));
        assert!(message.contains("404"));
    }
}
