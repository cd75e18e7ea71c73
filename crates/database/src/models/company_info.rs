//! 公司信息数据库模型
//!
//! 公司信息表最多只有一行，只能通过“更新或插入”的方式写入

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeMap;

/// 社交媒体平台名称 -> 主页地址
pub type SocialMedia = BTreeMap<String, Option<String>>;

/// 公司信息
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub id: String,
    pub company_name: String,
    pub tagline: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub logo_url: Option<String>,
    #[sqlx(json)]
    pub social_media: SocialMedia,
    pub working_hours: String,
    pub founded_year: i32,
    pub team_size: String,
    pub projects_completed: i32,
    pub years_experience: i32,
    pub updated_at: DateTime<Utc>,
}

/// 首次写入公司信息时需要的完整字段
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfoCreate {
    pub company_name: String,
    pub tagline: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub social_media: SocialMedia,
    pub working_hours: String,
    pub founded_year: i32,
    pub team_size: String,
    pub projects_completed: i32,
    pub years_experience: i32,
}

/// 公司信息更新参数
///
/// `logo_url` 可以为null，`Some(None)` 表示清空
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyInfoUpdate {
    pub company_name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub logo_url: Option<Option<String>>,
    pub social_media: Option<SocialMedia>,
    pub working_hours: Option<String>,
    pub founded_year: Option<i32>,
    pub team_size: Option<String>,
    pub projects_completed: Option<i32>,
    pub years_experience: Option<i32>,
}

impl CompanyInfoUpdate {
    /// 将更新参数转换为完整的创建参数
    ///
    /// 表中还没有公司信息时调用。缺少必填字段时返回缺失字段的名称列表（与json字段名一致）。
    pub fn into_create(self) -> Result<CompanyInfoCreate, Vec<&'static str>> {
        let mut missing = Vec::new();

        fn take<T>(value: Option<T>, name: &'static str, missing: &mut Vec<&'static str>) -> Option<T> {
            if value.is_none() {
                missing.push(name);
            }
            value
        }

        let company_name = take(self.company_name, "companyName", &mut missing);
        let tagline = take(self.tagline, "tagline", &mut missing);
        let description = take(self.description, "description", &mut missing);
        let email = take(self.email, "email", &mut missing);
        let phone = take(self.phone, "phone", &mut missing);
        let address = take(self.address, "address", &mut missing);
        let working_hours = take(self.working_hours, "workingHours", &mut missing);
        let founded_year = take(self.founded_year, "foundedYear", &mut missing);
        let team_size = take(self.team_size, "teamSize", &mut missing);
        let projects_completed = take(self.projects_completed, "projectsCompleted", &mut missing);
        let years_experience = take(self.years_experience, "yearsExperience", &mut missing);

        match (
            company_name,
            tagline,
            description,
            email,
            phone,
            address,
            working_hours,
            founded_year,
            team_size,
            projects_completed,
            years_experience,
        ) {
            (
                Some(company_name),
                Some(tagline),
                Some(description),
                Some(email),
                Some(phone),
                Some(address),
                Some(working_hours),
                Some(founded_year),
                Some(team_size),
                Some(projects_completed),
                Some(years_experience),
            ) => Ok(CompanyInfoCreate {
                company_name,
                tagline,
                description,
                email,
                phone,
                address,
                logo_url: self.logo_url.flatten(),
                social_media: self.social_media.unwrap_or_default(),
                working_hours,
                founded_year,
                team_size,
                projects_completed,
                years_experience,
            }),
            _ => Err(missing),
        }
    }
}

impl From<CompanyInfoCreate> for CompanyInfoUpdate {
    fn from(info: CompanyInfoCreate) -> Self {
        Self {
            company_name: Some(info.company_name),
            tagline: Some(info.tagline),
            description: Some(info.description),
            email: Some(info.email),
            phone: Some(info.phone),
            address: Some(info.address),
            logo_url: Some(info.logo_url),
            social_media: Some(info.social_media),
            working_hours: Some(info.working_hours),
            founded_year: Some(info.founded_year),
            team_size: Some(info.team_size),
            projects_completed: Some(info.projects_completed),
            years_experience: Some(info.years_experience),
        }
    }
}
