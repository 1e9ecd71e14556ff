//! Static catalog of generator modules shown by the views

/// Module category
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Category {
    WebSystem,
    DataAnalysis,
    Algorithms,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::WebSystem => "Web system",
            Category::DataAnalysis => "Data analysis",
            Category::Algorithms => "Algorithms",
        }
    }
}

/// How a configuration field is edited
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FieldKind {
    Text,
    Choice(&'static [&'static str]),
}

/// One configuration field of a module
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub default: &'static str,
    pub kind: FieldKind,
}

/// A generator module
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ModuleInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub tech_stack: &'static [&'static str],
    pub fields: &'static [FieldSpec],
}

const fn text(key: &'static str, label: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        label,
        default,
        kind: FieldKind::Text,
    }
}

const fn choice(
    key: &'static str,
    label: &'static str,
    default: &'static str,
    options: &'static [&'static str],
) -> FieldSpec {
    FieldSpec {
        key,
        label,
        default,
        kind: FieldKind::Choice(options),
    }
}

pub const MODULES: &[ModuleInfo] = &[
    ModuleInfo {
        id: "student_management",
        name: "Student Management System",
        description: "Student records, courses and grades with a Spring Boot back end and a Vue front end.",
        icon: "🎓",
        category: Category::WebSystem,
        tech_stack: &["Spring Boot", "MyBatis", "MySQL", "Vue 3"],
        fields: &[
            text("project_name", "Project name", "StudentManagement"),
            text("package_name", "Java package", "com.example.student"),
            text("db_name", "Database name", "student_db"),
        ],
    },
    ModuleInfo {
        id: "library_management",
        name: "Library Management System",
        description: "Books, readers and loans with borrowing limits and overdue tracking.",
        icon: "📚",
        category: Category::WebSystem,
        tech_stack: &["Spring Boot", "MyBatis", "MySQL", "Vue 3"],
        fields: &[
            text("project_name", "Project name", "LibraryManagement"),
            text("package_name", "Java package", "com.example.library"),
            text("db_name", "Database name", "library_db"),
        ],
    },
    ModuleInfo {
        id: "hotel_management",
        name: "Hotel Management System",
        description: "Rooms, reservations, check-in and check-out.",
        icon: "🏨",
        category: Category::WebSystem,
        tech_stack: &["Spring Boot", "MyBatis", "MySQL", "Vue 3"],
        fields: &[
            text("package_name", "Java package", "com.example.hotel"),
            text("db_name", "Database name", "hotel_db"),
        ],
    },
    ModuleInfo {
        id: "ecommerce",
        name: "E-commerce Platform",
        description: "Product catalog, cart and orders.",
        icon: "🛒",
        category: Category::WebSystem,
        tech_stack: &["Spring Boot", "MySQL", "Vue 3"],
        fields: &[
            text("package_name", "Java package", "com.example.shop"),
            text("db_name", "Database name", "shop_db"),
        ],
    },
    ModuleInfo {
        id: "blog_system",
        name: "Personal Blog",
        description: "Articles, categories and comments with a Flask API.",
        icon: "📝",
        category: Category::WebSystem,
        tech_stack: &["Flask", "SQLAlchemy", "SQLite", "Vue 3"],
        fields: &[text("project_name_cn", "Site title", "My Blog")],
    },
    ModuleInfo {
        id: "data_visualization",
        name: "Data Visualization Dashboard",
        description: "Sales dashboard with charts fed by a FastAPI service.",
        icon: "📊",
        category: Category::DataAnalysis,
        tech_stack: &["FastAPI", "pandas", "ECharts"],
        fields: &[choice("data_source", "Data source", "csv", &["csv", "mysql"])],
    },
    ModuleInfo {
        id: "algorithm_experiment",
        name: "Algorithm Experiments",
        description: "Sorting and searching experiments with a benchmark report.",
        icon: "🧮",
        category: Category::Algorithms,
        tech_stack: &["C++", "Python", "Java"],
        fields: &[choice("language", "Language", "cpp", &["cpp", "python", "java"])],
    },
];

pub fn find(id: &str) -> Option<&'static ModuleInfo> {
    MODULES.iter().find(|m| m.id == id)
}

/// Distinct categories, in declaration order
pub fn categories() -> Vec<Category> {
    let mut categories: Vec<Category> = MODULES.iter().map(|m| m.category).collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Modules whose name, id or tech stack contains `query` (case-insensitive)
pub fn search(query: &str, category: Option<Category>) -> Vec<&'static ModuleInfo> {
    let query = query.trim().to_lowercase();
    MODULES
        .iter()
        .filter(|m| category.map_or(true, |c| m.category == c))
        .filter(|m| {
            query.is_empty()
                || m.name.to_lowercase().contains(&query)
                || m.id.contains(&query)
                || m.tech_stack.iter().any(|t| t.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<_> = MODULES.iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), MODULES.len());
    }

    #[test]
    fn test_choice_defaults_are_options() {
        for module in MODULES {
            for field in module.fields {
                if let FieldKind::Choice(options) = field.kind {
                    assert!(options.contains(&field.default), "{}.{}", module.id, field.key);
                }
            }
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("ecommerce").map(|m| m.icon), Some("🛒"));
        assert!(find("unknown").is_none());
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            categories(),
            vec![Category::WebSystem, Category::DataAnalysis, Category::Algorithms]
        );
    }

    #[test]
    fn test_search() {
        assert_eq!(search("", None).len(), MODULES.len());
        let flask: Vec<_> = search("flask", None).iter().map(|m| m.id).collect();
        assert_eq!(flask, vec!["blog_system"]);

        let data = search("", Some(Category::DataAnalysis));
        assert_eq!(data.len(), 1);
        assert!(search("hotel", Some(Category::Algorithms)).is_empty());
    }
}
