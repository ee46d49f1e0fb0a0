//! English display strings.

pub const TABLE: &[(&str, &str)] = &[
    ("common.confirm", "Confirm"),
    ("common.cancel", "Cancel"),
    ("common.save", "Save"),
    ("common.delete", "Delete"),
    ("common.edit", "Edit"),
    ("common.add", "Add"),
    ("common.search", "Search"),
    ("common.loading", "Loading..."),
    ("common.error", "Error"),
    ("common.success", "Success"),
    ("common.warning", "Warning"),
    ("common.info", "Info"),
    ("common.switchLanguage", "中文"),
    ("home.title", "Cloud Edge Milk Tea Shop"),
    ("home.subtitle", "Intelligent Order System"),
    ("home.description", "Welcome to Cloud Edge Milk Tea Shop! I am your dedicated intelligent customer service, providing milk tea consultation, order inquiry, ordering services, and complaint feedback services."),
    ("home.startChat", "Start Chat"),
    ("home.features.title", "Service Features"),
    ("home.features.consult", "Milk Tea Consultation"),
    ("home.features.order", "Order Management"),
    ("home.features.feedback", "Complaint Feedback"),
    ("home.features.support", "Online Support"),
    ("chat.title", "Intelligent Customer Service Chat"),
    ("chat.placeholder", "Please enter your question..."),
    ("chat.send", "Send"),
    ("chat.clear", "Clear Chat"),
    ("chat.settings", "Settings"),
    ("chat.thinking", "AI is thinking..."),
    ("chat.error", "Send failed, please try again"),
    ("chat.welcome", "Hello! I am the intelligent customer service of Cloud Edge Milk Tea Shop. How can I help you?"),
    ("chat.examples.title", "Common Questions Examples"),
    ("chat.examples.menu", "What milk tea do you recommend?"),
    ("chat.examples.order", "I want to check my order"),
    ("chat.examples.price", "How much is the bubble tea?"),
    ("chat.examples.feedback", "I want to complain about service issues"),
    ("settings.title", "System Settings"),
    ("settings.apiConfig.title", "API Configuration"),
    ("settings.apiConfig.baseUrl", "Backend Service URL"),
    ("settings.apiConfig.baseUrlPlaceholder", "Please enter backend service URL, e.g.: http://localhost:10000"),
    ("settings.apiConfig.testConnection", "Test Connection"),
    ("settings.apiConfig.connectionSuccess", "Connection successful"),
    ("settings.apiConfig.connectionFailed", "Connection failed"),
    ("settings.apiConfig.apiUrl", "Chat Endpoint"),
    ("settings.userConfig.title", "User Configuration"),
    ("settings.userConfig.userId", "User ID"),
    ("settings.userConfig.userIdPlaceholder", "Please enter user ID"),
    ("settings.userConfig.chatId", "Chat ID"),
    ("settings.userConfig.chatIdPlaceholder", "Please enter chat ID (optional, leave empty for auto-generation)"),
];
