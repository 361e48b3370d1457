//! Static locale dictionaries.
//!
//! Pure data: one key→string table per supported locale, identical key sets
//! across all three (tested in `i18n`). A key missing from a non-English
//! table would be a data defect, not a runtime fault.

pub(crate) const UZ: &[(&str, &str)] = &[
    // Navigation
    ("home", "Bosh sahifa"),
    ("portfolio", "Portfolio"),
    ("about", "Haqida"),
    ("contact", "Aloqa"),
    ("login", "Kirish"),
    ("logout", "Chiqish"),
    // Theme
    ("toggle_theme", "Mavzuni o'zgartirish"),
    ("light", "Yorug'"),
    ("dark", "Qorong'u"),
    ("system", "Tizim"),
    // Language
    ("language", "Til"),
    // Portfolio
    ("all_projects", "Barcha loyihalar"),
    ("graphic_design", "Grafik dizayn"),
    ("motion_design", "Motion dizayn"),
    ("ui_ux", "UI/UX dizayn"),
    ("view_project", "Loyihani ko'rish"),
    // Contact
    ("name", "Ism"),
    ("email", "Email"),
    ("message", "Xabar"),
    ("send_message", "Xabarni yuborish"),
    ("contact_success", "Xabaringiz muvaffaqiyatli yuborildi!"),
    ("contact_error", "Xabar yuborishda xatolik yuz berdi"),
    // Auth
    ("email_placeholder", "Email manzilingiz"),
    ("password_placeholder", "Parolingiz"),
    ("sign_in", "Kirish"),
    ("sign_in_with_google", "Google orqali kirish"),
    // Admin
    ("admin_panel", "Admin panel"),
    ("add_project", "Loyiha qo'shish"),
    ("edit_project", "Loyihani tahrirlash"),
    ("delete_project", "Loyihani o'chirish"),
    ("project_title", "Loyiha nomi"),
    ("project_description", "Loyiha tavsifi"),
    ("project_category", "Loyiha kategoriyasi"),
    ("project_images", "Loyiha rasmlari"),
    ("upload_images", "Rasmlarni yuklash"),
    ("save", "Saqlash"),
    ("cancel", "Bekor qilish"),
    // Footer
    ("copyright", "Barcha huquqlar himoyalangan"),
];

pub(crate) const RU: &[(&str, &str)] = &[
    // Navigation
    ("home", "Главная"),
    ("portfolio", "Портфолио"),
    ("about", "О нас"),
    ("contact", "Контакты"),
    ("login", "Вход"),
    ("logout", "Выход"),
    // Theme
    ("toggle_theme", "Переключить тему"),
    ("light", "Светлая"),
    ("dark", "Темная"),
    ("system", "Системная"),
    // Language
    ("language", "Язык"),
    // Portfolio
    ("all_projects", "Все проекты"),
    ("graphic_design", "Графический дизайн"),
    ("motion_design", "Моушн дизайн"),
    ("ui_ux", "UI/UX дизайн"),
    ("view_project", "Посмотреть проект"),
    // Contact
    ("name", "Имя"),
    ("email", "Email"),
    ("message", "Сообщение"),
    ("send_message", "Отправить сообщение"),
    ("contact_success", "Ваше сообщение успешно отправлено!"),
    ("contact_error", "Ошибка при отправке сообщения"),
    // Auth
    ("email_placeholder", "Ваш email адрес"),
    ("password_placeholder", "Ваш пароль"),
    ("sign_in", "Войти"),
    ("sign_in_with_google", "Войти через Google"),
    // Admin
    ("admin_panel", "Панель администратора"),
    ("add_project", "Добавить проект"),
    ("edit_project", "Редактировать проект"),
    ("delete_project", "Удалить проект"),
    ("project_title", "Название проекта"),
    ("project_description", "Описание проекта"),
    ("project_category", "Категория проекта"),
    ("project_images", "Изображения проекта"),
    ("upload_images", "Загрузить изображения"),
    ("save", "Сохранить"),
    ("cancel", "Отмена"),
    // Footer
    ("copyright", "Все права защищены"),
];

pub(crate) const EN: &[(&str, &str)] = &[
    // Navigation
    ("home", "Home"),
    ("portfolio", "Portfolio"),
    ("about", "About"),
    ("contact", "Contact"),
    ("login", "Login"),
    ("logout", "Logout"),
    // Theme
    ("toggle_theme", "Toggle theme"),
    ("light", "Light"),
    ("dark", "Dark"),
    ("system", "System"),
    // Language
    ("language", "Language"),
    // Portfolio
    ("all_projects", "All Projects"),
    ("graphic_design", "Graphic Design"),
    ("motion_design", "Motion Design"),
    ("ui_ux", "UI/UX Design"),
    ("view_project", "View Project"),
    // Contact
    ("name", "Name"),
    ("email", "Email"),
    ("message", "Message"),
    ("send_message", "Send Message"),
    ("contact_success", "Your message has been sent successfully!"),
    ("contact_error", "Error sending message"),
    // Auth
    ("email_placeholder", "Your email address"),
    ("password_placeholder", "Your password"),
    ("sign_in", "Sign In"),
    ("sign_in_with_google", "Sign in with Google"),
    // Admin
    ("admin_panel", "Admin Panel"),
    ("add_project", "Add Project"),
    ("edit_project", "Edit Project"),
    ("delete_project", "Delete Project"),
    ("project_title", "Project Title"),
    ("project_description", "Project Description"),
    ("project_category", "Project Category"),
    ("project_images", "Project Images"),
    ("upload_images", "Upload Images"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    // Footer
    ("copyright", "All rights reserved"),
];
