use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// 客户提交的咨询
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InquiryCreate {
    #[validate(length(min = 1))]
    pub name: String,

    #[schema(example = "client@example.com")]
    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,

    pub company: Option<String>,

    /// 感兴趣的服务
    #[schema(example = "web")]
    #[validate(length(min = 1))]
    pub service: String,

    pub budget: Option<String>,

    #[validate(length(min = 1))]
    pub message: String,
}

/// 修改咨询状态的请求体
///
/// `status` 缺失或为空字符串时返回400
#[derive(Debug, Deserialize, ToSchema)]
pub struct InquiryStatusUpdate {
    #[schema(example = "contacted")]
    pub status: Option<String>,
}

impl InquiryStatusUpdate {
    /// 非空的状态值，按原样保存
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

impl From<InquiryCreate> for database::InquiryCreate {
    fn from(inquiry: InquiryCreate) -> Self {
        Self {
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            company: inquiry.company,
            service: inquiry.service,
            budget: inquiry.budget,
            message: inquiry.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invalid_email_is_rejected() {
        let inquiry: InquiryCreate = serde_json::from_value(json!({
            "name": "A",
            "email": "not-an-email",
            "service": "web",
            "message": "hi"
        }))
        .unwrap();

        assert!(inquiry.validate().unwrap_err().field_errors().contains_key("email"));
    }

    #[test]
    fn only_empty_status_is_missing() {
        let update: InquiryStatusUpdate = serde_json::from_value(json!({ "status": "" })).unwrap();
        assert_eq!(update.status(), None);

        let update: InquiryStatusUpdate = serde_json::from_value(json!({ "status": " contacted " })).unwrap();
        assert_eq!(update.status(), Some(" contacted "));

        let update: InquiryStatusUpdate = serde_json::from_value(json!({})).unwrap();
        assert_eq!(update.status(), None);

        let update: InquiryStatusUpdate = serde_json::from_value(json!({ "status": "contacted" })).unwrap();
        assert_eq!(update.status(), Some("contacted"));
    }
}
