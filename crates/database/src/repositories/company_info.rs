//! 公司信息仓库
//!
//! 公司信息表只有一行。写入时在事务中先获取事务级咨询锁，再"更新或插入"，
//! 这样并发的首次写入也只会插入一行；表上的 `singleton` 唯一列是最后一道约束。

use crate::models::company_info::{CompanyInfo, CompanyInfoUpdate};
use crate::repositories::traits::CompanyInfoRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, info};

/// `pg_advisory_xact_lock` 使用的锁编号，只要在本库内唯一即可
const COMPANY_INFO_LOCK_KEY: i64 = 0x636f_6d70_616e_79;

#[derive(Debug, Clone)]
pub struct CompanyInfoRepository {
    pool: PgPool,
}

impl CompanyInfoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CompanyInfoRepositoryTrait for CompanyInfoRepository {
    async fn get_company_info(&self) -> DatabaseResult<Option<CompanyInfo>> {
        debug!("🔍 获取公司信息");

        let info = sqlx::query_as::<_, CompanyInfo>(
            r#"
            SELECT id, company_name, tagline, description, email, phone, address, logo_url, social_media,
                   working_hours, founded_year, team_size, projects_completed, years_experience, updated_at
            FROM company_info
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(info)
    }

    async fn update_company_info(&self, update: CompanyInfoUpdate) -> DatabaseResult<CompanyInfo> {
        let mut tx = self.pool.begin().await?;
        let info = upsert_company_info(&mut *tx, update).await?;
        tx.commit().await?;

        Ok(info)
    }
}

/// 在调用方的事务中更新或插入公司信息
///
/// 咨询锁在事务提交或回滚时自动释放，调用方负责提交。
pub(crate) async fn upsert_company_info(
    conn: &mut PgConnection,
    update: CompanyInfoUpdate,
) -> DatabaseResult<CompanyInfo> {
    debug!("🔄 更新公司信息: {:#?}", update);

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(COMPANY_INFO_LOCK_KEY)
        .execute(&mut *conn)
        .await?;

    let updated = sqlx::query_as::<_, CompanyInfo>(
        r#"
        UPDATE company_info
        SET company_name = coalesce($1, company_name),
            tagline = coalesce($2, tagline),
            description = coalesce($3, description),
            email = coalesce($4, email),
            phone = coalesce($5, phone),
            address = coalesce($6, address),
            logo_url = CASE WHEN $7 THEN $8 ELSE logo_url END,
            social_media = coalesce($9, social_media),
            working_hours = coalesce($10, working_hours),
            founded_year = coalesce($11, founded_year),
            team_size = coalesce($12, team_size),
            projects_completed = coalesce($13, projects_completed),
            years_experience = coalesce($14, years_experience),
            updated_at = now()
        WHERE singleton
        RETURNING id, company_name, tagline, description, email, phone, address, logo_url, social_media,
                  working_hours, founded_year, team_size, projects_completed, years_experience, updated_at
        "#,
    )
    .bind(&update.company_name)
    .bind(&update.tagline)
    .bind(&update.description)
    .bind(&update.email)
    .bind(&update.phone)
    .bind(&update.address)
    .bind(update.logo_url.is_some())
    .bind(update.logo_url.clone().flatten())
    .bind(update.social_media.clone().map(Json))
    .bind(&update.working_hours)
    .bind(update.founded_year)
    .bind(&update.team_size)
    .bind(update.projects_completed)
    .bind(update.years_experience)
    .fetch_optional(&mut *conn)
    .await?;

    let info = match updated {
        Some(info) => info,
        None => {
            let create = update.into_create().map_err(|missing| {
                DatabaseError::validation(format!("missing required fields: {}", missing.join(", ")))
            })?;

            info!("🏢 首次写入公司信息: {}", create.company_name);

            sqlx::query_as::<_, CompanyInfo>(
                r#"
                INSERT INTO company_info (company_name, tagline, description, email, phone, address, logo_url,
                                          social_media, working_hours, founded_year, team_size,
                                          projects_completed, years_experience)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                RETURNING id, company_name, tagline, description, email, phone, address, logo_url, social_media,
                          working_hours, founded_year, team_size, projects_completed, years_experience, updated_at
                "#,
            )
            .bind(&create.company_name)
            .bind(&create.tagline)
            .bind(&create.description)
            .bind(&create.email)
            .bind(&create.phone)
            .bind(&create.address)
            .bind(&create.logo_url)
            .bind(Json(&create.social_media))
            .bind(&create.working_hours)
            .bind(create.founded_year)
            .bind(&create.team_size)
            .bind(create.projects_completed)
            .bind(create.years_experience)
            .fetch_one(&mut *conn)
            .await?
        }
    };

    Ok(info)
}
