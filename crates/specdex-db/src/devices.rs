//! Device queries: name search, detail fetch and the refresh write path.

use crate::error::{DatabaseError, Result};
use chrono::Utc;
use specdex_core::{Brand, Device, SpecificationRecord};
use sqlx::{Pool, Row, Sqlite, SqliteConnection};

/// A device together with its brand and its flat specification rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDetailRecord {
    /// The device itself
    pub device: Device,
    /// Owning brand
    pub brand: Brand,
    /// Specification rows in insertion order
    pub specifications: Vec<SpecificationRecord>,
}

/// Escape `LIKE` wildcards so the query is matched literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Find devices whose name contains `query`, ignoring case.
///
/// Both sides are lowercased with Unicode rules, so "éclair" finds
/// "Éclair Ömega". Returns at most `limit` devices ordered by name, then id.
///
/// # Errors
/// Returns `DatabaseError::Sqlx` if the database query fails.
pub async fn search_by_name(pool: &Pool<Sqlite>, query: &str, limit: u32) -> Result<Vec<Device>> {
    let pattern = format!("%{}%", escape_like(&query.to_lowercase()));
    tracing::debug!("Searching devices matching {:?} (limit {})", pattern, limit);

    let rows = sqlx::query_as::<_, (String, String, String)>(
        r"SELECT id, name, brand_id FROM devices
           WHERE name_folded LIKE ? ESCAPE '\'
           ORDER BY name, id
           LIMIT ?",
    )
    .bind(pattern)
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, brand_id)| Device { id, name, brand_id })
        .collect())
}

/// Load a device, its brand and all its specification rows in one query.
///
/// # Errors
/// Returns `DatabaseError::NotFoundWithMessage` if no device has this id.
pub async fn get_device_detail(pool: &Pool<Sqlite>, device_id: &str) -> Result<DeviceDetailRecord> {
    let rows = sqlx::query(
        "SELECT d.id AS device_id, d.name AS device_name, d.brand_id,
                b.name AS brand_name,
                s.spec_category, s.specification, s.spec_value
         FROM devices d
         JOIN brands b ON b.id = d.brand_id
         LEFT JOIN device_specifications s ON s.device_id = d.id
         WHERE d.id = ?
         ORDER BY s.id",
    )
    .bind(device_id)
    .fetch_all(pool)
    .await?;

    let first = rows.first().ok_or_else(|| {
        DatabaseError::NotFoundWithMessage(format!("Device '{device_id}' not found"))
    })?;

    let brand_id: String = first.try_get("brand_id")?;
    let device = Device {
        id: first.try_get("device_id")?,
        name: first.try_get("device_name")?,
        brand_id: brand_id.clone(),
    };
    let brand = Brand {
        id: brand_id,
        name: first.try_get("brand_name")?,
    };

    let mut specifications = Vec::with_capacity(rows.len());
    for row in &rows {
        // A device without specifications yields one row of NULLs.
        let category: Option<String> = row.try_get("spec_category")?;
        let Some(category) = category else {
            continue;
        };
        specifications.push(SpecificationRecord {
            category,
            field: row.try_get("specification")?,
            value: row.try_get("spec_value")?,
        });
    }

    Ok(DeviceDetailRecord {
        device,
        brand,
        specifications,
    })
}

/// Insert a device or update its name and brand, stamping `updated_at`.
///
/// Also stores the lowercased name that [`search_by_name`] matches against.
///
/// # Errors
/// Returns `DatabaseError::Sqlx` if the write fails, including when the brand
/// does not exist.
pub async fn upsert_device(conn: &mut SqliteConnection, device: &Device) -> Result<()> {
    sqlx::query(
        "INSERT INTO devices (id, name, name_folded, brand_id, updated_at)
         VALUES (?, ?, ?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET
             name = excluded.name,
             name_folded = excluded.name_folded,
             brand_id = excluded.brand_id,
             updated_at = excluded.updated_at",
    )
    .bind(&device.id)
    .bind(&device.name)
    .bind(device.name.to_lowercase())
    .bind(&device.brand_id)
    .bind(Utc::now().to_rfc3339())
    .execute(conn)
    .await?;

    Ok(())
}

/// Replace every specification row of a device.
///
/// Rows are inserted in slice order, which is the order detail fetches
/// return them in.
///
/// # Errors
/// Returns `DatabaseError::Sqlx` if any write fails.
pub async fn replace_specifications(
    conn: &mut SqliteConnection,
    device_id: &str,
    specifications: &[SpecificationRecord],
) -> Result<()> {
    sqlx::query("DELETE FROM device_specifications WHERE device_id = ?")
        .bind(device_id)
        .execute(&mut *conn)
        .await?;

    for spec in specifications {
        sqlx::query(
            "INSERT INTO device_specifications (device_id, spec_category, specification, spec_value)
             VALUES (?, ?, ?, ?)",
        )
        .bind(device_id)
        .bind(&spec.category)
        .bind(&spec.field)
        .bind(&spec.value)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{brands, Database};

    async fn setup_test_db() -> Database {
        let db = Database::new(":memory:", 1).await.expect("create database");
        db.run_migrations().await.expect("run migrations");

        let apple = Brand {
            id: "apple".to_string(),
            name: "Apple".to_string(),
        };
        db.save_device(
            &apple,
            &Device {
                id: "apple_iphone_15-12559".to_string(),
                name: "iPhone 15".to_string(),
                brand_id: "apple".to_string(),
            },
            &[
                SpecificationRecord::new("Display", "Size", "6.1 inches"),
                SpecificationRecord::new("Display", "Type", "Super Retina XDR OLED"),
                SpecificationRecord::new("Battery", "Type", "Li-Ion 3349 mAh"),
            ],
        )
        .await
        .expect("save iphone 15");
        db.save_device(
            &apple,
            &Device {
                id: "apple_iphone_15_pro-12557".to_string(),
                name: "iPhone 15 Pro".to_string(),
                brand_id: "apple".to_string(),
            },
            &[],
        )
        .await
        .expect("save iphone 15 pro");
        db.save_device(
            &Brand {
                id: "alcatel".to_string(),
                name: "Alcatel".to_string(),
            },
            &Device {
                id: "alcatel_eclair_omega-1".to_string(),
                name: "Éclair Ömega".to_string(),
                brand_id: "alcatel".to_string(),
            },
            &[],
        )
        .await
        .expect("save eclair omega");

        db
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let db = setup_test_db().await;

        for query in ["iphone", "IPHONE", "iPhone 15"] {
            let devices = search_by_name(db.pool(), query, 25)
                .await
                .expect("search devices");
            assert_eq!(devices.len(), 2, "query {query:?}");
            assert_eq!(devices[0].name, "iPhone 15");
        }

        for query in ["éclair", "ÉCLAIR", "ömega", "ÖMEGA", "Éclair ömega"] {
            let devices = search_by_name(db.pool(), query, 25)
                .await
                .expect("search devices");
            assert_eq!(devices.len(), 1, "query {query:?}");
            assert_eq!(devices[0].name, "Éclair Ömega");
        }
    }

    #[tokio::test]
    async fn test_rename_updates_search() {
        let db = setup_test_db().await;
        let brand = Brand {
            id: "alcatel".to_string(),
            name: "Alcatel".to_string(),
        };
        let renamed = Device {
            id: "alcatel_eclair_omega-1".to_string(),
            name: "Ürsa".to_string(),
            brand_id: "alcatel".to_string(),
        };
        db.save_device(&brand, &renamed, &[])
            .await
            .expect("rename device");

        let devices = search_by_name(db.pool(), "ürsa", 25)
            .await
            .expect("search devices");
        assert_eq!(devices.len(), 1);
        let devices = search_by_name(db.pool(), "éclair", 25)
            .await
            .expect("search devices");
        assert!(devices.is_empty());
    }

    #[tokio::test]
    async fn test_search_respects_limit() {
        let db = setup_test_db().await;

        let devices = search_by_name(db.pool(), "iphone", 1)
            .await
            .expect("search devices");
        assert_eq!(devices.len(), 1);
    }

    #[tokio::test]
    async fn test_search_matches_wildcards_literally() {
        let db = setup_test_db().await;

        let devices = search_by_name(db.pool(), "%", 25)
            .await
            .expect("search devices");
        assert!(devices.is_empty());

        let devices = search_by_name(db.pool(), "iPhone_15", 25)
            .await
            .expect("search devices");
        assert!(devices.is_empty());
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("galaxy"), "galaxy");
    }

    #[tokio::test]
    async fn test_get_device_detail() {
        let db = setup_test_db().await;

        let detail = get_device_detail(db.pool(), "apple_iphone_15-12559")
            .await
            .expect("get device detail");

        assert_eq!(detail.device.name, "iPhone 15");
        assert_eq!(detail.brand.name, "Apple");
        assert_eq!(detail.specifications.len(), 3);
        assert_eq!(
            detail.specifications[0],
            SpecificationRecord::new("Display", "Size", "6.1 inches")
        );
    }

    #[tokio::test]
    async fn test_get_device_detail_without_specifications() {
        let db = setup_test_db().await;

        let detail = get_device_detail(db.pool(), "apple_iphone_15_pro-12557")
            .await
            .expect("get device detail");

        assert_eq!(detail.device.name, "iPhone 15 Pro");
        assert!(detail.specifications.is_empty());
    }

    #[tokio::test]
    async fn test_get_device_detail_not_found() {
        let db = setup_test_db().await;

        let result = get_device_detail(db.pool(), "does-not-exist").await;
        match result {
            Err(DatabaseError::NotFoundWithMessage(msg)) => {
                assert!(msg.contains("Device 'does-not-exist' not found"));
            }
            other => panic!("Expected NotFoundWithMessage error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_replace_specifications() {
        let db = setup_test_db().await;
        let mut conn = db.pool().acquire().await.expect("acquire connection");

        replace_specifications(
            &mut conn,
            "apple_iphone_15-12559",
            &[SpecificationRecord::new("Memory", "Internal", "128GB")],
        )
        .await
        .expect("replace specifications");
        drop(conn);

        let detail = get_device_detail(db.pool(), "apple_iphone_15-12559")
            .await
            .expect("get device detail");
        assert_eq!(
            detail.specifications,
            vec![SpecificationRecord::new("Memory", "Internal", "128GB")]
        );
    }

    #[tokio::test]
    async fn test_upsert_device_requires_brand() {
        let db = setup_test_db().await;
        let mut conn = db.pool().acquire().await.expect("acquire connection");

        let orphan = Device {
            id: "nokia_3310-192".to_string(),
            name: "3310".to_string(),
            brand_id: "nokia".to_string(),
        };
        let result = upsert_device(&mut conn, &orphan).await;
        assert!(matches!(result, Err(DatabaseError::Sqlx(_))));

        brands::upsert_brand(
            &mut conn,
            &Brand {
                id: "nokia".to_string(),
                name: "Nokia".to_string(),
            },
        )
        .await
        .expect("insert brand");
        upsert_device(&mut conn, &orphan)
            .await
            .expect("insert device once brand exists");
    }
}
