//! Typed keys for the UI string tables

/// Interface strings. The discriminant is the row index in every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Overview,
    Analytics,
    Products,
    Users,
    Settings,
    TotalRevenue,
    Orders,
    ActiveUsers,
    TotalSales,
    NewUsers,
    AvgOrder,
    Conversion,
    RevenueOverview,
    TopProducts,
    SalesByCategory,
    SalesByRegion,
    Export,
    ExportReport,
    Refresh,
    Filter,
    Search,
    AddProduct,
    EditProduct,
    DeleteProduct,
    ProductName,
    Category,
    Price,
    Stock,
    Status,
    Active,
    Inactive,
    Sales,
    AddUser,
    EditUser,
    DeleteUser,
    Name,
    Email,
    Phone,
    Role,
    Admin,
    Manager,
    User,
}

impl TextKey {
    pub const COUNT: usize = 42;

    pub const ALL: [TextKey; TextKey::COUNT] = [
        TextKey::Overview,
        TextKey::Analytics,
        TextKey::Products,
        TextKey::Users,
        TextKey::Settings,
        TextKey::TotalRevenue,
        TextKey::Orders,
        TextKey::ActiveUsers,
        TextKey::TotalSales,
        TextKey::NewUsers,
        TextKey::AvgOrder,
        TextKey::Conversion,
        TextKey::RevenueOverview,
        TextKey::TopProducts,
        TextKey::SalesByCategory,
        TextKey::SalesByRegion,
        TextKey::Export,
        TextKey::ExportReport,
        TextKey::Refresh,
        TextKey::Filter,
        TextKey::Search,
        TextKey::AddProduct,
        TextKey::EditProduct,
        TextKey::DeleteProduct,
        TextKey::ProductName,
        TextKey::Category,
        TextKey::Price,
        TextKey::Stock,
        TextKey::Status,
        TextKey::Active,
        TextKey::Inactive,
        TextKey::Sales,
        TextKey::AddUser,
        TextKey::EditUser,
        TextKey::DeleteUser,
        TextKey::Name,
        TextKey::Email,
        TextKey::Phone,
        TextKey::Role,
        TextKey::Admin,
        TextKey::Manager,
        TextKey::User,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Product category labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    SelectCategory,
    Electronics,
    Accessories,
    Clothing,
    Home,
}

impl CategoryKey {
    pub const COUNT: usize = 5;

    pub fn index(self) -> usize {
        self as usize
    }

    /// Map a stored category name to its key, ignoring case
    pub fn from_category(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "electronics" => Some(CategoryKey::Electronics),
            "accessories" => Some(CategoryKey::Accessories),
            "clothing" => Some(CategoryKey::Clothing),
            "home" => Some(CategoryKey::Home),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_discriminant_order() {
        for (i, key) in TextKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_category_from_name() {
        assert_eq!(CategoryKey::from_category("Electronics"), Some(CategoryKey::Electronics));
        assert_eq!(CategoryKey::from_category(" HOME "), Some(CategoryKey::Home));
        assert_eq!(CategoryKey::from_category("Garden"), None);
    }
}
