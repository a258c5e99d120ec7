//! Static string tables, one row per [`TextKey`] / [`CategoryKey`] in
//! declaration order. Array lengths are checked by the compiler.

use super::keys::{CategoryKey, TextKey};

pub(super) type TextTable = [&'static str; TextKey::COUNT];
pub(super) type CategoryTable = [&'static str; CategoryKey::COUNT];

pub(super) static EN_US: TextTable = [
    "Overview",
    "Analytics",
    "Products",
    "Users",
    "Settings",
    "Total Revenue",
    "Orders",
    "Active Users",
    "Total Sales",
    "New Users",
    "Avg. Order",
    "Conversion",
    "Revenue Overview",
    "Top Products",
    "Sales by Category",
    "Sales by Region",
    "Export",
    "Export Report",
    "Refresh",
    "Filter",
    "Search",
    "Add Product",
    "Edit Product",
    "Delete Product",
    "Product Name",
    "Category",
    "Price",
    "Stock",
    "Status",
    "Active",
    "Inactive",
    "sales",
    "Add User",
    "Edit User",
    "Delete User",
    "Name",
    "Email",
    "Phone",
    "Role",
    "Admin",
    "Manager",
    "User",
];

pub(super) static ES_ES: TextTable = [
    "Resumen",
    "Analítica",
    "Productos",
    "Usuarios",
    "Configuración",
    "Ingresos Totales",
    "Pedidos",
    "Usuarios Activos",
    "Ventas Totales",
    "Nuevos Usuarios",
    "Pedido Promedio",
    "Conversión",
    "Resumen de Ingresos",
    "Productos Principales",
    "Ventas por Categoría",
    "Ventas por Región",
    "Exportar",
    "Exportar Informe",
    "Actualizar",
    "Filtrar",
    "Buscar",
    "Agregar Producto",
    "Editar Producto",
    "Eliminar Producto",
    "Nombre del Producto",
    "Categoría",
    "Precio",
    "Stock",
    "Estado",
    "Activo",
    "Inactivo",
    "ventas",
    "Agregar Usuario",
    "Editar Usuario",
    "Eliminar Usuario",
    "Nombre",
    "Correo",
    "Teléfono",
    "Rol",
    "Administrador",
    "Gerente",
    "Usuario",
];

pub(super) static FR_FR: TextTable = [
    "Aperçu",
    "Analytique",
    "Produits",
    "Utilisateurs",
    "Paramètres",
    "Revenu Total",
    "Commandes",
    "Utilisateurs Actifs",
    "Ventes Totales",
    "Nouveaux Utilisateurs",
    "Commande Moyenne",
    "Conversion",
    "Aperçu des Revenus",
    "Meilleurs Produits",
    "Ventes par Catégorie",
    "Ventes par Région",
    "Exporter",
    "Exporter le Rapport",
    "Actualiser",
    "Filtrer",
    "Rechercher",
    "Ajouter un Produit",
    "Modifier le Produit",
    "Supprimer le Produit",
    "Nom du Produit",
    "Catégorie",
    "Prix",
    "Stock",
    "Statut",
    "Actif",
    "Inactif",
    "ventes",
    "Ajouter un Utilisateur",
    "Modifier l'Utilisateur",
    "Supprimer l'Utilisateur",
    "Nom",
    "E-mail",
    "Téléphone",
    "Rôle",
    "Administrateur",
    "Gestionnaire",
    "Utilisateur",
];

pub(super) static DE_DE: TextTable = [
    "Übersicht",
    "Analytik",
    "Produkte",
    "Benutzer",
    "Einstellungen",
    "Gesamtumsatz",
    "Bestellungen",
    "Aktive Benutzer",
    "Gesamtverkäufe",
    "Neue Benutzer",
    "Durchschn. Bestellung",
    "Konversion",
    "Umsatzübersicht",
    "Top-Produkte",
    "Verkäufe nach Kategorie",
    "Verkäufe nach Region",
    "Exportieren",
    "Bericht exportieren",
    "Aktualisieren",
    "Filtern",
    "Suchen",
    "Produkt hinzufügen",
    "Produkt bearbeiten",
    "Produkt löschen",
    "Produktname",
    "Kategorie",
    "Preis",
    "Lagerbestand",
    "Status",
    "Aktiv",
    "Inaktiv",
    "Verkäufe",
    "Benutzer hinzufügen",
    "Benutzer bearbeiten",
    "Benutzer löschen",
    "Name",
    "E-Mail",
    "Telefon",
    "Rolle",
    "Administrator",
    "Manager",
    "Benutzer",
];

pub(super) static PT_BR: TextTable = [
    "Visão Geral",
    "Análises",
    "Produtos",
    "Usuários",
    "Configurações",
    "Receita Total",
    "Pedidos",
    "Usuários Ativos",
    "Vendas Totais",
    "Novos Usuários",
    "Pedido Médio",
    "Conversão",
    "Visão Geral da Receita",
    "Produtos Principais",
    "Vendas por Categoria",
    "Vendas por Região",
    "Exportar",
    "Exportar Relatório",
    "Atualizar",
    "Filtrar",
    "Pesquisar",
    "Adicionar Produto",
    "Editar Produto",
    "Excluir Produto",
    "Nome do Produto",
    "Categoria",
    "Preço",
    "Estoque",
    "Status",
    "Ativo",
    "Inativo",
    "vendas",
    "Adicionar Usuário",
    "Editar Usuário",
    "Excluir Usuário",
    "Nome",
    "E-mail",
    "Telefone",
    "Função",
    "Administrador",
    "Gerente",
    "Usuário",
];

pub(super) static JA_JP: TextTable = [
    "概要",
    "分析",
    "製品",
    "ユーザー",
    "設定",
    "総収益",
    "注文",
    "アクティブユーザー",
    "総売上",
    "新規ユーザー",
    "平均注文額",
    "コンバージョン",
    "収益概要",
    "人気製品",
    "カテゴリ別売上",
    "地域別売上",
    "エクスポート",
    "レポートをエクスポート",
    "更新",
    "フィルター",
    "検索",
    "製品を追加",
    "製品を編集",
    "製品を削除",
    "製品名",
    "カテゴリ",
    "価格",
    "在庫",
    "ステータス",
    "有効",
    "無効",
    "販売",
    "ユーザーを追加",
    "ユーザーを編集",
    "ユーザーを削除",
    "名前",
    "メール",
    "電話",
    "役割",
    "管理者",
    "マネージャー",
    "ユーザー",
];

pub(super) static ZH_CN: TextTable = [
    "概览",
    "分析",
    "产品",
    "用户",
    "设置",
    "总收入",
    "订单",
    "活跃用户",
    "总销售额",
    "新用户",
    "平均订单",
    "转化率",
    "收入概览",
    "热门产品",
    "按类别销售",
    "按地区销售",
    "导出",
    "导出报告",
    "刷新",
    "筛选",
    "搜索",
    "添加产品",
    "编辑产品",
    "删除产品",
    "产品名称",
    "类别",
    "价格",
    "库存",
    "状态",
    "活跃",
    "未激活",
    "销量",
    "添加用户",
    "编辑用户",
    "删除用户",
    "姓名",
    "邮箱",
    "电话",
    "角色",
    "管理员",
    "经理",
    "用户",
];

pub(super) static CATEGORIES_EN: CategoryTable =
    ["Select category", "Electronics", "Accessories", "Clothing", "Home"];

pub(super) static CATEGORIES_ES: CategoryTable =
    ["Seleccionar categoría", "Electrónicos", "Accesorios", "Ropa", "Hogar"];

pub(super) static CATEGORIES_FR: CategoryTable = [
    "Sélectionner une catégorie",
    "Électronique",
    "Accessoires",
    "Vêtements",
    "Maison",
];

pub(super) static CATEGORIES_DE: CategoryTable =
    ["Kategorie auswählen", "Elektronik", "Zubehör", "Kleidung", "Haushalt"];

pub(super) static CATEGORIES_PT: CategoryTable =
    ["Selecionar categoria", "Eletrônicos", "Acessórios", "Roupas", "Casa"];

pub(super) static CATEGORIES_JA: CategoryTable =
    ["カテゴリを選択", "電子機器", "アクセサリー", "衣類", "ホーム"];

pub(super) static CATEGORIES_ZH: CategoryTable = ["选择类别", "电子产品", "配件", "服装", "家居"];
