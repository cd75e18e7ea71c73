use crate::models::nullable;
use database::SocialMedia;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// 更新公司信息的请求体
///
/// 所有字段可选；表中还没有公司信息时必须传入全部必填字段
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfoUpdate {
    #[validate(length(min = 1))]
    pub company_name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// 传入null时清空logo
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub logo_url: Option<Option<String>>,
    /// 平台名称 -> 主页地址
    #[schema(value_type = Option<Object>, example = json!({"github": "https://github.com/studio"}))]
    pub social_media: Option<SocialMedia>,
    pub working_hours: Option<String>,
    #[schema(example = 2020)]
    pub founded_year: Option<i32>,
    #[schema(example = "10-20")]
    pub team_size: Option<String>,
    #[validate(range(min = 0))]
    pub projects_completed: Option<i32>,
    #[validate(range(min = 0))]
    pub years_experience: Option<i32>,
}

impl From<CompanyInfoUpdate> for database::CompanyInfoUpdate {
    fn from(update: CompanyInfoUpdate) -> Self {
        Self {
            company_name: update.company_name,
            tagline: update.tagline,
            description: update.description,
            email: update.email,
            phone: update.phone,
            address: update.address,
            logo_url: update.logo_url,
            social_media: update.social_media,
            working_hours: update.working_hours,
            founded_year: update.founded_year,
            team_size: update.team_size,
            projects_completed: update.projects_completed,
            years_experience: update.years_experience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn social_media_accepts_null_links() {
        let update: CompanyInfoUpdate = serde_json::from_value(json!({
            "socialMedia": { "github": "https://github.com/studio", "twitter": null }
        }))
        .unwrap();
        assert!(update.validate().is_ok());

        let social = database::CompanyInfoUpdate::from(update).social_media.unwrap();
        assert_eq!(social.get("twitter"), Some(&None));
        assert_eq!(social.len(), 2);
    }

    #[test]
    fn null_logo_clears_it() {
        let update: CompanyInfoUpdate = serde_json::from_value(json!({ "logoUrl": null })).unwrap();
        assert_eq!(database::CompanyInfoUpdate::from(update).logo_url, Some(None));

        let update: CompanyInfoUpdate = serde_json::from_value(json!({ "tagline": "New" })).unwrap();
        assert_eq!(database::CompanyInfoUpdate::from(update).logo_url, None);
    }

    #[test]
    fn invalid_email_is_rejected() {
        let update = CompanyInfoUpdate {
            email: Some("studio".into()),
            ..Default::default()
        };
        assert!(update.validate().unwrap_err().field_errors().contains_key("email"));
    }
}
