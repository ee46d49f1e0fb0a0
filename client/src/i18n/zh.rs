//! Simplified Chinese display strings.

pub const TABLE: &[(&str, &str)] = &[
    ("common.confirm", "确认"),
    ("common.cancel", "取消"),
    ("common.save", "保存"),
    ("common.delete", "删除"),
    ("common.edit", "编辑"),
    ("common.add", "添加"),
    ("common.search", "搜索"),
    ("common.loading", "加载中..."),
    ("common.error", "错误"),
    ("common.success", "成功"),
    ("common.warning", "警告"),
    ("common.info", "信息"),
    ("common.switchLanguage", "English"),
    ("home.title", "云边奶茶铺"),
    ("home.subtitle", "智能订单系统"),
    ("home.description", "欢迎来到云边奶茶铺！我是您的专属智能客服，可以为您提供奶茶咨询、订单查询、下单服务以及投诉反馈等服务。"),
    ("home.startChat", "开始对话"),
    ("home.features.title", "服务功能"),
    ("home.features.consult", "奶茶咨询"),
    ("home.features.order", "订单管理"),
    ("home.features.feedback", "投诉反馈"),
    ("home.features.support", "在线客服"),
    ("chat.title", "云边奶茶铺智能助手"),
    ("chat.placeholder", "请输入您的问题..."),
    ("chat.send", "发送"),
    ("chat.clear", "清空对话"),
    ("chat.settings", "设置"),
    ("chat.thinking", "AI正在思考中..."),
    ("chat.error", "发送失败，请重试"),
    ("chat.welcome", "您好！我是云边奶茶铺的智能助手，有什么可以帮助您的吗？"),
    ("chat.examples.title", "常见问题示例"),
    ("chat.examples.menu", "请为我推荐当季新品"),
    ("chat.examples.order", "我想查询我的订单"),
    ("chat.examples.price", "老样子，来一杯！"),
    ("chat.examples.feedback", "我要投诉服务或质量问题"),
    ("settings.title", "系统设置"),
    ("settings.apiConfig.title", "API 配置"),
    ("settings.apiConfig.baseUrl", "后端服务地址"),
    ("settings.apiConfig.baseUrlPlaceholder", "请输入后端服务地址，如：http://localhost:10000"),
    ("settings.apiConfig.testConnection", "测试连接"),
    ("settings.apiConfig.connectionSuccess", "连接成功"),
    ("settings.apiConfig.connectionFailed", "连接失败"),
    ("settings.apiConfig.apiUrl", "对话接口"),
    ("settings.userConfig.title", "用户配置"),
    ("settings.userConfig.userId", "用户ID"),
    ("settings.userConfig.userIdPlaceholder", "请输入用户ID"),
    ("settings.userConfig.chatId", "对话ID"),
    ("settings.userConfig.chatIdPlaceholder", "请输入对话ID（可选，留空将自动生成）"),
];
