//! Embedded template sources
//!
//! Rendered with minijinja (`trim_blocks` and `lstrip_blocks` on, strict
//! undefined). A file with the same asset name in the template override
//! directory replaces the embedded copy.

/// Cordova plugin descriptor (`plugin.xml`)
pub const PLUGIN_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plugin xmlns="http://apache.org/cordova/ns/plugins/1.0"
{% if hasAndroid %}
        xmlns:android="http://schemas.android.com/apk/res/android"
{% endif %}
        id="{{ id|xml }}"
        version="1.0.0">
    <name>{{ name|xml }}</name>
    <description>{{ description|xml }}</description>
    <license>{{ license|xml }}</license>
    <author>{{ author|xml }}</author>

    <js-module src="www/{{ apiName|xml }}.js" name="{{ apiName|xml }}">
        <clobbers target="cordova.plugins.{{ apiName|xml }}" />
    </js-module>
{% for platform in platforms %}
{% if platform == "android" %}

    <platform name="android">
        <config-file target="res/xml/config.xml" parent="/*">
            <feature name="{{ apiName|xml }}">
                <param name="android-package" value="{{ androidPackage|xml }}.{{ apiName|xml }}" />
            </feature>
        </config-file>
        <source-file src="src/android/{{ androidPackagePath|xml }}/{{ apiName|xml }}.kt"
                     target-dir="app/src/main/kotlin/{{ androidPackagePath|xml }}" />
    </platform>
{% elif platform == "ios" %}

    <platform name="ios">
        <config-file target="config.xml" parent="/*">
            <feature name="{{ apiName|xml }}">
                <param name="ios-package" value="{{ apiName|xml }}" />
            </feature>
        </config-file>
        <source-file src="src/ios/{{ apiName|xml }}.swift" />
    </platform>
{% elif platform == "electron" %}

    <platform name="electron">
        <framework src="src/electron" />
    </platform>
{% endif %}
{% endfor %}
</plugin>
"#;

/// Frontend API exposed to the web view
pub const API_JS: &str = r"var exec = require('cordova/exec');

var SERVICE = '{{ apiName }}';

/**
 * {{ name }}
 *
 * {{ description }}
 */
var {{ apiName }} = {
    coolMethod: function (message, success, error) {
        exec(success, error, SERVICE, 'coolMethod', [message]);
    }
};

module.exports = {{ apiName }};
";

/// Android service (Kotlin)
pub const ANDROID_KT: &str = r#"package {{ androidPackage }}

import org.apache.cordova.CallbackContext
import org.apache.cordova.CordovaPlugin
import org.json.JSONArray
import org.json.JSONException

/**
 * {{ name }}
 *
 * Source directory: src/android/{{ androidPackagePath }}
 */
class {{ apiName }} : CordovaPlugin() {

    @Throws(JSONException::class)
    override fun execute(action: String, args: JSONArray, callbackContext: CallbackContext): Boolean {
        if (action == "coolMethod") {
            coolMethod(args.optString(0), callbackContext)
            return true
        }
        return false
    }

    private fun coolMethod(message: String?, callbackContext: CallbackContext) {
        if (!message.isNullOrEmpty()) {
            callbackContext.success(message)
        } else {
            callbackContext.error("Expected one non-empty string argument.")
        }
    }
}
"#;

/// iOS service (Swift)
pub const IOS_SWIFT: &str = r#"import Foundation

/// {{ name }}
@objc({{ apiName }})
class {{ apiName }}: CDVPlugin {

    @objc(coolMethod:)
    func coolMethod(_ command: CDVInvokedUrlCommand) {
        let message = command.arguments.first as? String ?? ""
        let result: CDVPluginResult

        if message.isEmpty {
            result = CDVPluginResult(status: CDVCommandStatus_ERROR, messageAs: "Expected one non-empty string argument.")
        } else {
            result = CDVPluginResult(status: CDVCommandStatus_OK, messageAs: message)
        }

        commandDelegate.send(result, callbackId: command.callbackId)
    }
}
"#;

/// Electron service (Node.js)
pub const ELECTRON_JS: &str = r"/**
 * {{ name }} - Electron service for {{ apiName }}
 */
module.exports = {
    coolMethod: function ([message]) {
        if (!message) {
            throw new Error('Expected one non-empty string argument.');
        }
        return message;
    }
};
";
