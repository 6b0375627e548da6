//! 英文翻译 (en-US)

use whois_lookup_core::render::{
    CONTACT_HEADERS, CONTACT_HIDDEN_PLACEHOLDER, CONTACT_SECTION_TITLE, DOMAIN_HEADERS,
    DOMAIN_HIDDEN_PLACEHOLDER, DOMAIN_SECTION_TITLE,
};
use whois_lookup_core::{FAILURE_MESSAGE, SUCCESS_MESSAGE};

use super::keys::{
    ActionTexts, CommonTexts, FormTexts, HintTexts, KeyNames, RecordTexts, StatusBarTexts,
    ToastTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "WHOIS Lookup",
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
            lookup: "Lookup",
            toggle_domain: "Domain Table",
            toggle_contact: "Contact Table",
            quit: "Quit",
        },
    },

    // ========================================================================
    // 查询表单
    // ========================================================================
    form: FormTexts {
        title: "Domain Name",
        placeholder: "Enter domain name (e.g., example.com)",
        required: "Please fill out this field.",
    },

    // ========================================================================
    // 结果表格
    // ========================================================================
    record: RecordTexts {
        domain_title: DOMAIN_SECTION_TITLE,
        contact_title: CONTACT_SECTION_TITLE,
        domain_hidden: DOMAIN_HIDDEN_PLACEHOLDER,
        contact_hidden: CONTACT_HIDDEN_PLACEHOLDER,
        domain_headers: DOMAIN_HEADERS,
        contact_headers: CONTACT_HEADERS,
        empty: "Type a domain name and press Enter to look it up.",
    },

    // ========================================================================
    // 通知
    // ========================================================================
    toast: ToastTexts {
        success: SUCCESS_MESSAGE,
        failure: FAILURE_MESSAGE,
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        looking_up: "Looking up...",
    },
};
