//! 内存版仓库实现，用于在没有数据库的情况下测试路由

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use database::{
    BlogPost, BlogPostCreate, BlogPostRepositoryTrait, BlogPostUpdate, CompanyInfo, CompanyInfoRepositoryTrait,
    CompanyInfoUpdate, DatabaseError, DatabaseResult, Inquiry, InquiryCreate, InquiryRepositoryTrait, PricingPlan,
    PricingPlanCreate, PricingPlanRepositoryTrait, PricingPlanUpdate, Project, ProjectCreate, ProjectRepositoryTrait,
    ProjectUpdate, DEFAULT_INQUIRY_STATUS,
};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use web_service::AppState;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> String {
    format!("mem-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

fn remove_by_id<T>(rows: &Mutex<Vec<T>>, id: &str, key: impl Fn(&T) -> &str) -> bool {
    let mut rows = rows.lock().unwrap();
    let before = rows.len();
    rows.retain(|row| key(row) != id);
    rows.len() != before
}

#[derive(Default)]
pub struct MemoryProjects {
    rows: Mutex<Vec<Project>>,
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for MemoryProjects {
    async fn get_all_projects(&self) -> DatabaseResult<Vec<Project>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.order.cmp(&a.order));
        Ok(rows)
    }

    async fn get_featured_projects(&self) -> DatabaseResult<Vec<Project>> {
        let rows = self.get_all_projects().await?;
        Ok(rows.into_iter().filter(|p| p.featured).collect())
    }

    async fn get_project_by_id(&self, id: &str) -> DatabaseResult<Option<Project>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<Project> {
        let now = Utc::now();
        let project = Project {
            id: next_id(),
            title: project.title,
            description: project.description,
            long_description: project.long_description,
            category: project.category,
            image_url: project.image_url,
            technologies: project.technologies,
            live_url: project.live_url,
            github_url: project.github_url,
            featured: project.featured,
            order: project.order,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn update_project(&self, id: &str, update: ProjectUpdate) -> DatabaseResult<Option<Project>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(project) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(title) = update.title {
            project.title = title;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        if let Some(long_description) = update.long_description {
            project.long_description = long_description;
        }
        if let Some(category) = update.category {
            project.category = category;
        }
        if let Some(image_url) = update.image_url {
            project.image_url = image_url;
        }
        if let Some(technologies) = update.technologies {
            project.technologies = technologies;
        }
        if let Some(live_url) = update.live_url {
            project.live_url = live_url;
        }
        if let Some(github_url) = update.github_url {
            project.github_url = github_url;
        }
        if let Some(featured) = update.featured {
            project.featured = featured;
        }
        if let Some(order) = update.order {
            project.order = order;
        }
        project.updated_at = Utc::now();

        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: &str) -> DatabaseResult<bool> {
        Ok(remove_by_id(&self.rows, id, |p| &p.id))
    }
}

#[derive(Default)]
pub struct MemoryBlogPosts {
    rows: Mutex<Vec<BlogPost>>,
}

#[async_trait::async_trait]
impl BlogPostRepositoryTrait for MemoryBlogPosts {
    async fn get_all_blog_posts(&self, published: Option<bool>) -> DatabaseResult<Vec<BlogPost>> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| published.map_or(true, |published| p.published == published))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get_blog_post_by_id(&self, id: &str) -> DatabaseResult<Option<BlogPost>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> DatabaseResult<Option<BlogPost>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.slug == slug).cloned())
    }

    async fn create_blog_post(&self, post: BlogPostCreate) -> DatabaseResult<BlogPost> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|p| p.slug == post.slug) {
            return Err(DatabaseError::connection(format!("duplicate slug {}", post.slug)));
        }

        let now = Utc::now();
        let post = BlogPost {
            id: next_id(),
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            cover_image: post.cover_image,
            author: post.author,
            category: post.category,
            tags: post.tags,
            published: post.published,
            read_time: post.read_time,
            created_at: now,
            updated_at: now,
        };
        rows.push(post.clone());
        Ok(post)
    }

    async fn update_blog_post(&self, id: &str, update: BlogPostUpdate) -> DatabaseResult<Option<BlogPost>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(post) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(excerpt) = update.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(cover_image) = update.cover_image {
            post.cover_image = cover_image;
        }
        if let Some(author) = update.author {
            post.author = author;
        }
        if let Some(category) = update.category {
            post.category = category;
        }
        if let Some(tags) = update.tags {
            post.tags = tags;
        }
        if let Some(published) = update.published {
            post.published = published;
        }
        if let Some(read_time) = update.read_time {
            post.read_time = read_time;
        }
        post.updated_at = Utc::now();

        Ok(Some(post.clone()))
    }

    async fn delete_blog_post(&self, id: &str) -> DatabaseResult<bool> {
        Ok(remove_by_id(&self.rows, id, |p| &p.id))
    }
}

#[derive(Default)]
pub struct MemoryPricingPlans {
    rows: Mutex<Vec<PricingPlan>>,
}

#[async_trait::async_trait]
impl PricingPlanRepositoryTrait for MemoryPricingPlans {
    async fn get_all_pricing_plans(&self, active_only: bool) -> DatabaseResult<Vec<PricingPlan>> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !active_only || p.active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.order.cmp(&a.order));
        Ok(rows)
    }

    async fn get_pricing_plan_by_id(&self, id: &str) -> DatabaseResult<Option<PricingPlan>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn create_pricing_plan(&self, plan: PricingPlanCreate) -> DatabaseResult<PricingPlan> {
        let now = Utc::now();
        let plan = PricingPlan {
            id: next_id(),
            name: plan.name,
            description: plan.description,
            price: plan.price,
            currency: plan.currency,
            duration: plan.duration,
            features: plan.features,
            popular: plan.popular,
            order: plan.order,
            active: plan.active,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(plan.clone());
        Ok(plan)
    }

    async fn update_pricing_plan(&self, id: &str, update: PricingPlanUpdate) -> DatabaseResult<Option<PricingPlan>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(plan) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            plan.name = name;
        }
        if let Some(description) = update.description {
            plan.description = description;
        }
        if let Some(price) = update.price {
            plan.price = price;
        }
        if let Some(currency) = update.currency {
            plan.currency = currency;
        }
        if let Some(duration) = update.duration {
            plan.duration = duration;
        }
        if let Some(features) = update.features {
            plan.features = features;
        }
        if let Some(popular) = update.popular {
            plan.popular = popular;
        }
        if let Some(order) = update.order {
            plan.order = order;
        }
        if let Some(active) = update.active {
            plan.active = active;
        }
        plan.updated_at = Utc::now();

        Ok(Some(plan.clone()))
    }

    async fn delete_pricing_plan(&self, id: &str) -> DatabaseResult<bool> {
        Ok(remove_by_id(&self.rows, id, |p| &p.id))
    }
}

#[derive(Default)]
pub struct MemoryInquiries {
    rows: Mutex<Vec<Inquiry>>,
}

#[async_trait::async_trait]
impl InquiryRepositoryTrait for MemoryInquiries {
    async fn get_all_inquiries(&self) -> DatabaseResult<Vec<Inquiry>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get_inquiry_by_id(&self, id: &str) -> DatabaseResult<Option<Inquiry>> {
        Ok(self.rows.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn create_inquiry(&self, inquiry: InquiryCreate) -> DatabaseResult<Inquiry> {
        let inquiry = Inquiry {
            id: next_id(),
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            company: inquiry.company,
            service: inquiry.service,
            budget: inquiry.budget,
            message: inquiry.message,
            status: DEFAULT_INQUIRY_STATUS.to_string(),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(inquiry.clone());
        Ok(inquiry)
    }

    async fn update_inquiry_status(&self, id: &str, status: &str) -> DatabaseResult<Option<Inquiry>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|i| i.id == id).map(|inquiry| {
            inquiry.status = status.to_string();
            inquiry.clone()
        }))
    }

    async fn delete_inquiry(&self, id: &str) -> DatabaseResult<bool> {
        Ok(remove_by_id(&self.rows, id, |i| &i.id))
    }
}

#[derive(Default)]
pub struct MemoryCompanyInfo {
    row: Mutex<Option<CompanyInfo>>,
}

#[async_trait::async_trait]
impl CompanyInfoRepositoryTrait for MemoryCompanyInfo {
    async fn get_company_info(&self) -> DatabaseResult<Option<CompanyInfo>> {
        Ok(self.row.lock().unwrap().clone())
    }

    async fn update_company_info(&self, update: CompanyInfoUpdate) -> DatabaseResult<CompanyInfo> {
        let mut row = self.row.lock().unwrap();

        let info = match row.take() {
            Some(mut info) => {
                if let Some(company_name) = update.company_name {
                    info.company_name = company_name;
                }
                if let Some(tagline) = update.tagline {
                    info.tagline = tagline;
                }
                if let Some(email) = update.email {
                    info.email = email;
                }
                if let Some(logo_url) = update.logo_url {
                    info.logo_url = logo_url;
                }
                if let Some(social_media) = update.social_media {
                    info.social_media = social_media;
                }
                if let Some(projects_completed) = update.projects_completed {
                    info.projects_completed = projects_completed;
                }
                info.updated_at = Utc::now();
                info
            }
            None => {
                let create = update.into_create().map_err(|missing| {
                    DatabaseError::validation(format!("missing required fields: {}", missing.join(", ")))
                })?;
                CompanyInfo {
                    id: next_id(),
                    company_name: create.company_name,
                    tagline: create.tagline,
                    description: create.description,
                    email: create.email,
                    phone: create.phone,
                    address: create.address,
                    logo_url: create.logo_url,
                    social_media: create.social_media,
                    working_hours: create.working_hours,
                    founded_year: create.founded_year,
                    team_size: create.team_size,
                    projects_completed: create.projects_completed,
                    years_experience: create.years_experience,
                    updated_at: Utc::now(),
                }
            }
        };

        *row = Some(info.clone());
        Ok(info)
    }
}

/// 每个方法都返回连接错误的项目仓库
pub struct BrokenProjects;

#[async_trait::async_trait]
impl ProjectRepositoryTrait for BrokenProjects {
    async fn get_all_projects(&self) -> DatabaseResult<Vec<Project>> {
        Err(DatabaseError::connection("connection refused (os error 111)"))
    }

    async fn get_featured_projects(&self) -> DatabaseResult<Vec<Project>> {
        Err(DatabaseError::connection("connection refused (os error 111)"))
    }

    async fn get_project_by_id(&self, _id: &str) -> DatabaseResult<Option<Project>> {
        Err(DatabaseError::connection("connection refused (os error 111)"))
    }

    async fn create_project(&self, _project: ProjectCreate) -> DatabaseResult<Project> {
        Err(DatabaseError::connection("connection refused (os error 111)"))
    }

    async fn update_project(&self, _id: &str, _update: ProjectUpdate) -> DatabaseResult<Option<Project>> {
        Err(DatabaseError::connection("connection refused (os error 111)"))
    }

    async fn delete_project(&self, _id: &str) -> DatabaseResult<bool> {
        Err(DatabaseError::connection("connection refused (os error 111)"))
    }
}

pub fn memory_state() -> AppState {
    AppState {
        project_repository: Arc::new(MemoryProjects::default()),
        blog_post_repository: Arc::new(MemoryBlogPosts::default()),
        pricing_plan_repository: Arc::new(MemoryPricingPlans::default()),
        inquiry_repository: Arc::new(MemoryInquiries::default()),
        company_info_repository: Arc::new(MemoryCompanyInfo::default()),
    }
}

pub fn test_app() -> Router {
    web_service::routes::create_app_router(memory_state())
}

/// 发送请求并把响应体解析为json，响应体为空时返回 [`Value::Null`]
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
