//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **查询表单归 `form.*`**：输入框标题、占位符与必填提示
//! 3. **结果表格归 `record.*`**：分区标题、列名与隐藏占位文本
//! 4. **通知归 `toast.*`**：成功 / 失败提示
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 查询表单文本
    pub form: FormTexts,
    /// 结果表格文本
    pub record: RecordTexts,
    /// 通知文本
    pub toast: ToastTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub toggle_domain: &'static str,  // "F2"
    pub toggle_contact: &'static str, // "F3"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub lookup: &'static str,
    pub toggle_domain: &'static str,
    pub toggle_contact: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 查询表单
// ============================================================================

/// 查询表单文本
pub struct FormTexts {
    pub title: &'static str,
    pub placeholder: &'static str,
    /// 输入为空时提交的提示
    pub required: &'static str,
}

// ============================================================================
// 结果表格
// ============================================================================

/// 结果表格文本
pub struct RecordTexts {
    pub domain_title: &'static str,
    pub contact_title: &'static str,
    pub domain_hidden: &'static str,
    pub contact_hidden: &'static str,
    /// 与 `DomainRow::cells()` 同序
    pub domain_headers: [&'static str; 6],
    /// 与 `ContactRow::cells()` 同序
    pub contact_headers: [&'static str; 4],
    /// 尚无记录时的提示
    pub empty: &'static str,
}

// ============================================================================
// 通知
// ============================================================================

/// 通知文本
pub struct ToastTexts {
    pub success: &'static str,
    pub failure: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub looking_up: &'static str,
}
