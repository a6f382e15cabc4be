use sqlx::SqlitePool;

use crate::dto::vehicle_dto::UpsertOutcome;
use crate::models::Vehicle;
use crate::utils::errors::AppResult;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT renavam, placa, marca, modelo FROM veiculos",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_placa(&self, placa: &str) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT renavam, placa, marca, modelo FROM veiculos WHERE placa = ?",
        )
        .bind(placa)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Devuelve cuántas filas se borraron
    pub async fn delete_by_placa(&self, placa: &str) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM veiculos WHERE placa = ?")
            .bind(placa)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Insertar o actualizar por placa dentro de una sola transacción.
    ///
    /// El índice único sobre `placa` hace que dos upserts concurrentes de la
    /// misma placa nueva no puedan insertar dos filas: uno inserta y el otro
    /// cae en el UPDATE.
    pub async fn upsert(&self, vehicle: &Vehicle) -> AppResult<UpsertOutcome> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO veiculos (renavam, placa, marca, modelo)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(placa) DO NOTHING
            "#,
        )
        .bind(&vehicle.renavam)
        .bind(&vehicle.placa)
        .bind(&vehicle.marca)
        .bind(&vehicle.modelo)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let outcome = if inserted > 0 {
            UpsertOutcome::Created
        } else {
            sqlx::query("UPDATE veiculos SET renavam = ?, marca = ?, modelo = ? WHERE placa = ?")
                .bind(&vehicle.renavam)
                .bind(&vehicle.marca)
                .bind(&vehicle.modelo)
                .bind(&vehicle.placa)
                .execute(&mut *tx)
                .await?;
            UpsertOutcome::Updated
        };

        tx.commit().await?;
        Ok(outcome)
    }
}
