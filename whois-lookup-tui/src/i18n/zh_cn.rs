//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "WHOIS 查询",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            toggle_domain: "F2",
            toggle_contact: "F3",
        },
        actions: ActionTexts {
            lookup: "查询",
            toggle_domain: "域名信息",
            toggle_contact: "联系人信息",
            quit: "退出",
        },
    },

    // ========================================================================
    // 查询表单
    // ========================================================================
    form: FormTexts {
        title: "域名",
        placeholder: "输入域名（例如 example.com）",
        required: "请填写此字段。",
    },

    // ========================================================================
    // 结果表格
    // ========================================================================
    record: RecordTexts {
        domain_title: "域名信息",
        contact_title: "联系人信息",
        domain_hidden: "域名信息表已隐藏",
        contact_hidden: "联系人信息表已隐藏",
        domain_headers: ["域名", "注册商", "注册日期", "到期日期", "估算域名年龄", "域名服务器"],
        contact_headers: ["注册人", "技术联系人", "管理联系人", "联系邮箱"],
        empty: "输入域名并按 Enter 查询。",
    },

    // ========================================================================
    // 通知
    // ========================================================================
    toast: ToastTexts {
        success: "WHOIS 数据获取成功",
        failure: "WHOIS 数据获取失败",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        looking_up: "查询中...",
    },
};
