//! Admin panel: content list, menu item form, categories.

use shared::{split_list, KeyFeatures, MenuItem, MenuItemCategory, NewMenuItem, User, UserRole};

use crate::core::error::{AppError, Result};
use crate::utils::validation::{parse_price, validate_category_name, validate_menu_item};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Content,
    Categories,
    Users,
}

impl AdminTab {
    /// Tabs offered to a role set
    pub fn visible(roles: &[UserRole]) -> Vec<AdminTab> {
        let mut tabs = vec![AdminTab::Content];
        if shared::roles::can_manage_content(roles) {
            tabs.push(AdminTab::Categories);
        }
        if shared::roles::can_manage_users(roles) {
            tabs.push(AdminTab::Users);
        }
        tabs
    }

    pub fn title(&self) -> &'static str {
        match self {
            AdminTab::Content => "Content",
            AdminTab::Categories => "Categories",
            AdminTab::Users => "Users",
        }
    }
}

/// New menu item form, kept as raw text until submit
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: Option<i64>,
    pub image_url: String,
    pub ingredients: String,
    pub allergens: String,
    pub is_active: bool,
}

impl Default for MenuItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category_id: None,
            image_url: String::new(),
            ingredients: String::new(),
            allergens: String::new(),
            is_active: true,
        }
    }
}

impl MenuItemForm {
    /// Validate locally and build the insert payload
    pub fn to_new_item(&self) -> Result<NewMenuItem> {
        let check = validate_menu_item(&self.name, &self.description, &self.price, self.category_id);
        if !check.is_valid {
            return Err(AppError::Validation(check.error.unwrap_or_default()));
        }
        let (Some(price), Some(category_id)) = (parse_price(&self.price), self.category_id) else {
            return Err(AppError::State("Menu item form changed during validation".into()));
        };

        Ok(NewMenuItem {
            category_id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            image_url: self.image_url.trim().to_string(),
            key_features: KeyFeatures::from_lists(
                split_list(&self.ingredients),
                split_list(&self.allergens),
            ),
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AdminState {
    pub tab: AdminTab,
    pub loading: bool,
    pub items: Vec<MenuItem>,
    pub categories: Vec<MenuItemCategory>,
    pub users: Vec<User>,
    pub form_open: bool,
    pub form: MenuItemForm,
    pub form_error: Option<String>,
    pub submitting: bool,
    pub new_category: String,
    pub adding_category: bool,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            tab: AdminTab::Content,
            loading: true,
            items: Vec::new(),
            categories: Vec::new(),
            users: Vec::new(),
            form_open: false,
            form: MenuItemForm::default(),
            form_error: None,
            submitting: false,
            new_category: String::new(),
            adding_category: false,
        }
    }
}

impl AdminState {
    /// Fresh form, defaulting to the first category
    pub fn open_form(&mut self) {
        self.form = MenuItemForm {
            category_id: self.categories.first().map(|category| category.id),
            ..Default::default()
        };
        self.form_error = None;
        self.form_open = true;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
        self.form_error = None;
        self.submitting = false;
    }

    /// Validate the form and mark it as submitting
    pub fn begin_submit(&mut self) -> Result<NewMenuItem> {
        if self.submitting {
            return Err(AppError::State("Menu item is already being saved".into()));
        }
        self.form_error = None;
        match self.form.to_new_item() {
            Ok(item) => {
                self.submitting = true;
                Ok(item)
            }
            Err(e) => {
                self.form_error = Some(e.message().to_string());
                Err(e)
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<MenuItem>) {
        self.submitting = false;
        match result {
            Ok(item) => {
                self.items.insert(0, item);
                self.form_open = false;
                self.form = MenuItemForm::default();
            }
            Err(e) => self.form_error = Some(e.message().to_string()),
        }
    }

    /// Validate the category name and mark it as being added
    pub fn begin_add_category(&mut self) -> Result<String> {
        let check = validate_category_name(&self.new_category);
        if !check.is_valid {
            return Err(AppError::Validation(check.error.unwrap_or_default()));
        }
        if self.adding_category {
            return Err(AppError::State("Category is already being added".into()));
        }
        self.adding_category = true;
        Ok(self.new_category.trim().to_string())
    }

    /// Store the new category, keeping the list sorted by name
    pub fn finish_add_category(&mut self, result: &Result<MenuItemCategory>) {
        self.adding_category = false;
        if let Ok(category) = result {
            self.categories.push(category.clone());
            self.categories
                .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            self.new_category.clear();
        }
    }

    pub fn category_name(&self, id: i64) -> &str {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.as_str())
            .unwrap_or("Uncategorised")
    }
}
